//! I define [`Vocab`], the ids of the RDF(S) terms used by entailment rules.
use deduce_api::ns::{rdf, rdfs, xsd, NsTerm};
use deduce_inmem::TripleStore;

/// The ids, in a given [`TripleStore`], of the terms that entailment rules refer to.
///
/// A `Vocab` is only valid for the store it was built from.
#[derive(Clone, Copy, Debug)]
pub struct Vocab {
    /// `rdf:type`
    pub rdf_type: usize,
    /// `rdf:Property`
    pub rdf_property: usize,
    /// `rdf:langString`
    pub rdf_lang_string: usize,
    /// `xsd:string`
    pub xsd_string: usize,
    /// `rdfs:Resource`
    pub rdfs_resource: usize,
    /// `rdfs:Class`
    pub rdfs_class: usize,
    /// `rdfs:Literal`
    pub rdfs_literal: usize,
    /// `rdfs:Datatype`
    pub rdfs_datatype: usize,
    /// `rdfs:subClassOf`
    pub rdfs_sub_class_of: usize,
    /// `rdfs:subPropertyOf`
    pub rdfs_sub_property_of: usize,
    /// `rdfs:domain`
    pub rdfs_domain: usize,
    /// `rdfs:range`
    pub rdfs_range: usize,
    /// `rdfs:member`
    pub rdfs_member: usize,
    /// `rdfs:ContainerMembershipProperty`
    pub rdfs_container_membership_property: usize,
}

impl Vocab {
    /// Intern all the terms of the vocabulary in `store`, and return their ids.
    ///
    /// This does not change the set of triples in `store`.
    pub fn intern(store: &mut TripleStore) -> Self {
        let mut id = |t: &NsTerm| store.intern_iri(&t.iri());
        Vocab {
            rdf_type: id(&rdf::type_),
            rdf_property: id(&rdf::Property),
            rdf_lang_string: id(&rdf::langString),
            xsd_string: id(&xsd::string),
            rdfs_resource: id(&rdfs::Resource),
            rdfs_class: id(&rdfs::Class),
            rdfs_literal: id(&rdfs::Literal),
            rdfs_datatype: id(&rdfs::Datatype),
            rdfs_sub_class_of: id(&rdfs::subClassOf),
            rdfs_sub_property_of: id(&rdfs::subPropertyOf),
            rdfs_domain: id(&rdfs::domain),
            rdfs_range: id(&rdfs::range),
            rdfs_member: id(&rdfs::member),
            rdfs_container_membership_property: id(&rdfs::ContainerMembershipProperty),
        }
    }
}
