use deduce_api::ns::{rdf, rdfs, xsd};
use deduce_api::term::Term;
use deduce_inmem::{TripleIds, TripleStore};
use rayon::iter::{ParallelBridge, ParallelExtend, ParallelIterator};

use super::_rdf::*;
use super::{Axiom, Rule, RuleSet};
use crate::vocab::Vocab;

/// A [`RuleSet`] for [RDFS semantics](https://www.w3.org/TR/rdf11-mt/#rdfs-interpretations)
///
/// # Limitations
///
/// All those of [`Rdf`](super::Rdf), plus
///
/// * any IRI should have `rdf:type` `rdfs:Resource`,
///   but this implementation only infers it for terms used in the store;
/// * literals should have `rdf:type` `rdfs:Resource` (and `rdfs:Literal`),
///   but this can only be expressed in generalized RDF,
///   so rules `rdfs3` and `rdfs4b` ignore literal objects.
pub struct Rdfs;

impl RuleSet for Rdfs {
    fn axioms() -> impl Iterator<Item = &'static Axiom> {
        RDF_AXIOMS
            .iter()
            .chain(RDFS_AXIOMS.iter())
            .chain(RECOGNIZED_DATATYPES.iter())
    }
    fn rules() -> &'static [Rule] {
        &RDFS_RULES
    }
}

/// https://www.w3.org/TR/rdf11-mt/#rdfs-interpretations (RDFS axiomatic triples)
static RDFS_AXIOMS: [Axiom; 41] = [
    [&rdf::type_, &rdfs::domain, &rdfs::Resource],
    [&rdfs::domain, &rdfs::domain, &rdf::Property],
    [&rdfs::range, &rdfs::domain, &rdf::Property],
    [&rdfs::subPropertyOf, &rdfs::domain, &rdf::Property],
    [&rdfs::subClassOf, &rdfs::domain, &rdfs::Class],
    [&rdf::subject, &rdfs::domain, &rdf::Statement],
    [&rdf::predicate, &rdfs::domain, &rdf::Statement],
    [&rdf::object, &rdfs::domain, &rdf::Statement],
    [&rdfs::member, &rdfs::domain, &rdfs::Resource],
    [&rdf::first, &rdfs::domain, &rdf::List],
    [&rdf::rest, &rdfs::domain, &rdf::List],
    [&rdfs::seeAlso, &rdfs::domain, &rdfs::Resource],
    [&rdfs::isDefinedBy, &rdfs::domain, &rdfs::Resource],
    [&rdfs::comment, &rdfs::domain, &rdfs::Resource],
    [&rdfs::label, &rdfs::domain, &rdfs::Resource],
    [&rdf::value, &rdfs::domain, &rdfs::Resource],
    //
    [&rdf::type_, &rdfs::range, &rdfs::Class],
    [&rdfs::domain, &rdfs::range, &rdfs::Class],
    [&rdfs::range, &rdfs::range, &rdfs::Class],
    [&rdfs::subPropertyOf, &rdfs::range, &rdf::Property],
    [&rdfs::subClassOf, &rdfs::range, &rdfs::Class],
    [&rdf::subject, &rdfs::range, &rdfs::Resource],
    [&rdf::predicate, &rdfs::range, &rdfs::Resource],
    [&rdf::object, &rdfs::range, &rdfs::Resource],
    [&rdfs::member, &rdfs::range, &rdfs::Resource],
    [&rdf::first, &rdfs::range, &rdfs::Resource],
    [&rdf::rest, &rdfs::range, &rdf::List],
    [&rdfs::seeAlso, &rdfs::range, &rdfs::Resource],
    [&rdfs::isDefinedBy, &rdfs::range, &rdfs::Resource],
    [&rdfs::comment, &rdfs::range, &rdfs::Literal],
    [&rdfs::label, &rdfs::range, &rdfs::Literal],
    [&rdf::value, &rdfs::range, &rdfs::Resource],
    //
    [&rdf::Alt, &rdfs::subClassOf, &rdfs::Container],
    [&rdf::Bag, &rdfs::subClassOf, &rdfs::Container],
    [&rdf::Seq, &rdfs::subClassOf, &rdfs::Container],
    [&rdfs::ContainerMembershipProperty, &rdfs::subClassOf, &rdf::Property],
    [&rdfs::isDefinedBy, &rdfs::subPropertyOf, &rdfs::seeAlso],
    [&rdfs::Datatype, &rdfs::subClassOf, &rdfs::Class],
    //
    [&rdf::_1, &rdf::type_, &rdfs::ContainerMembershipProperty],
    [&rdf::_1, &rdfs::domain, &rdfs::Resource],
    [&rdf::_1, &rdfs::range, &rdfs::Resource],
];

/// https://www.w3.org/TR/rdf11-mt/#dfn-rdfs1
static RECOGNIZED_DATATYPES: [Axiom; 2] = [
    [&rdf::langString, &rdf::type_, &rdfs::Datatype],
    [&xsd::string, &rdf::type_, &rdfs::Datatype],
];

static RDFS_RULES: [Rule; 17] = [
    Rule {
        name: "rdf1",
        apply: rdf1,
    },
    Rule {
        name: "rdf_membership",
        apply: rdf_membership,
    },
    Rule {
        name: "rdfs2",
        apply: rdfs2,
    },
    Rule {
        name: "rdfs3",
        apply: rdfs3,
    },
    Rule {
        name: "rdfs4a",
        apply: rdfs4a,
    },
    Rule {
        name: "rdfs4b",
        apply: rdfs4b,
    },
    Rule {
        name: "rdfs5",
        apply: rdfs5,
    },
    Rule {
        name: "rdfs6",
        apply: rdfs6,
    },
    Rule {
        name: "rdfs7",
        apply: rdfs7,
    },
    Rule {
        name: "rdfs8",
        apply: rdfs8,
    },
    Rule {
        name: "rdfs9",
        apply: rdfs9,
    },
    Rule {
        name: "rdfs10",
        apply: rdfs10,
    },
    Rule {
        name: "rdfs11",
        apply: rdfs11,
    },
    Rule {
        name: "rdfs12",
        apply: rdfs12,
    },
    Rule {
        name: "rdfs13",
        apply: rdfs13,
    },
    Rule {
        name: "rdfs_membership",
        apply: rdfs_membership,
    },
    Rule {
        name: "literal_datatypes",
        apply: literal_datatypes,
    },
];

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs2)
pub(crate) fn rdfs2(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let type_ = v.rdf_type;
    buf.par_extend(
        store
            .ids_with_predicate(v.rdfs_domain)
            .par_bridge()
            .flat_map_iter(|[p, _, c]| {
                store
                    .ids_with_predicate(p)
                    .map(move |[s, _, _]| [s, type_, c])
            }),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs3)
pub(crate) fn rdfs3(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let type_ = v.rdf_type;
    buf.par_extend(
        store
            .ids_with_predicate(v.rdfs_range)
            .par_bridge()
            .flat_map_iter(|[p, _, c]| {
                store
                    .ids_with_predicate(p)
                    .filter(move |[_, _, o]| !store.term(*o).is_literal())
                    .map(move |[_, _, o]| [o, type_, c])
            }),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs4a)
pub(crate) fn rdfs4a(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (type_, resource) = (v.rdf_type, v.rdfs_resource);
    buf.par_extend(
        store
            .ids()
            .par_bridge()
            .map(move |[s, _, _]| [s, type_, resource]),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs4b)
pub(crate) fn rdfs4b(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (type_, resource) = (v.rdf_type, v.rdfs_resource);
    buf.par_extend(
        store
            .ids()
            .par_bridge()
            .filter(|[_, _, o]| !store.term(*o).is_literal())
            .map(move |[_, _, o]| [o, type_, resource]),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs5)
pub(crate) fn rdfs5(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    buf.par_extend(transitive(store, v.rdfs_sub_property_of));
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs6)
pub(crate) fn rdfs6(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let sub_property_of = v.rdfs_sub_property_of;
    buf.par_extend(
        store
            .ids_with_predicate_object(v.rdf_type, v.rdf_property)
            .par_bridge()
            .map(move |[p, _, _]| [p, sub_property_of, p]),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs7)
pub(crate) fn rdfs7(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    buf.par_extend(
        store
            .ids_with_predicate(v.rdfs_sub_property_of)
            .par_bridge()
            .filter(|[p1, _, p2]| p1 != p2 && store.term(*p2).is_iri())
            .flat_map_iter(|[p1, _, p2]| {
                store
                    .ids_with_predicate(p1)
                    .map(move |[s, _, o]| [s, p2, o])
            }),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs8)
pub(crate) fn rdfs8(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (sub_class_of, resource) = (v.rdfs_sub_class_of, v.rdfs_resource);
    buf.par_extend(
        store
            .ids_with_predicate_object(v.rdf_type, v.rdfs_class)
            .par_bridge()
            .map(move |[c, _, _]| [c, sub_class_of, resource]),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs9)
pub(crate) fn rdfs9(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let type_ = v.rdf_type;
    buf.par_extend(
        store
            .ids_with_predicate(v.rdfs_sub_class_of)
            .par_bridge()
            .filter(|[c1, _, c2]| c1 != c2)
            .flat_map_iter(|[c1, _, c2]| {
                store
                    .ids_with_predicate_object(type_, c1)
                    .map(move |[s, _, _]| [s, type_, c2])
            }),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs10)
pub(crate) fn rdfs10(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let sub_class_of = v.rdfs_sub_class_of;
    buf.par_extend(
        store
            .ids_with_predicate_object(v.rdf_type, v.rdfs_class)
            .par_bridge()
            .map(move |[c, _, _]| [c, sub_class_of, c]),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs11)
pub(crate) fn rdfs11(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    buf.par_extend(transitive(store, v.rdfs_sub_class_of));
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs12)
pub(crate) fn rdfs12(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (sub_property_of, member) = (v.rdfs_sub_property_of, v.rdfs_member);
    buf.par_extend(
        store
            .ids_with_predicate_object(v.rdf_type, v.rdfs_container_membership_property)
            .par_bridge()
            .map(move |[p, _, _]| [p, sub_property_of, member]),
    );
}

/// https://www.w3.org/TR/rdf11-mt/#patterns-of-rdfs-entailment (rdfs13)
pub(crate) fn rdfs13(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (sub_class_of, literal) = (v.rdfs_sub_class_of, v.rdfs_literal);
    buf.par_extend(
        store
            .ids_with_predicate_object(v.rdf_type, v.rdfs_datatype)
            .par_bridge()
            .map(move |[d, _, _]| [d, sub_class_of, literal]),
    );
}

/// axiomatic triples for all container membership properties used in the store
pub(crate) fn rdfs_membership(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let Vocab {
        rdf_type,
        rdfs_domain,
        rdfs_range,
        rdfs_resource,
        rdfs_container_membership_property,
        ..
    } = *v;
    buf.par_extend(membership_properties(store).flat_map_iter(move |i| {
        [
            [i, rdf_type, rdfs_container_membership_property],
            [i, rdfs_domain, rdfs_resource],
            [i, rdfs_range, rdfs_resource],
        ]
    }));
}

/// the datatype of every literal in the store is an `rdfs:Datatype`
pub(crate) fn literal_datatypes(store: &TripleStore, v: &Vocab, buf: &mut Vec<TripleIds>) {
    let (type_, datatype) = (v.rdf_type, v.rdfs_datatype);
    let lang_string = v.rdf_lang_string;
    buf.par_extend(
        store
            .terms()
            .par_bridge()
            .filter_map(move |(_, t)| {
                let lit = match t {
                    Term::Literal(lit) => lit,
                    _ => return None,
                };
                if lit.language_tag().is_some() {
                    return Some(lang_string);
                }
                let dt = lit.datatype()?;
                // the store interns the datatype of every literal it interns
                let Some(id) = store.iri_id(dt) else {
                    unreachable!("datatype <{dt}> of a stored literal has no id");
                };
                Some(id)
            })
            .map(move |dt| [dt, type_, datatype]),
    );
}

/// transitive closure of `prop`, ignoring reflexive triples
fn transitive(store: &TripleStore, prop: usize) -> impl ParallelIterator<Item = TripleIds> + '_ {
    store
        .ids_with_predicate(prop)
        .par_bridge()
        .filter(|[x2, _, x3]| x2 != x3)
        .flat_map_iter(move |[x2, _, x3]| {
            store
                .ids_with_predicate_object(prop, x2)
                .filter_map(move |[x1, _, _]| (x1 != x2 && x1 != x3).then_some([x1, prop, x3]))
        })
}
