use super::*;
use deduce_api::ns::{rdf, rdfs, xsd};
use deduce_api::term::{Literal, TermKind};
use deduce_api::triple::MalformedTriple;
use test_case::test_case;

fn ex(suffix: &str) -> Term {
    Term::iri(&format!("http://example.org/{suffix}")).unwrap()
}

fn t(s: Term, p: Term, o: Term) -> Triple {
    Triple::new(s, p, o)
}

/// A small store about Alice and Bob
fn alice_bob() -> TripleStore {
    let mut g = TripleStore::new();
    let b = g.bnode("b").unwrap();
    g.insert(ex("alice"), ex("knows"), ex("bob")).unwrap();
    g.insert(ex("alice"), rdf::type_.term(), ex("Person")).unwrap();
    g.insert(ex("bob"), rdf::type_.term(), ex("Person")).unwrap();
    g.insert(ex("bob"), ex("knows"), b.clone()).unwrap();
    g.insert(b, ex("name"), Term::plain("Carol")).unwrap();
    g
}

#[test]
fn empty() {
    let g = TripleStore::new();
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
    assert_eq!(g.triples().count(), 0);
    assert_eq!(g.matching(None, None, None).count(), 0);
    assert!(!g.contains(&t(ex("s"), ex("p"), ex("o"))));
}

#[test]
fn add_has_set_semantics() {
    let mut g = TripleStore::new();
    assert!(g.add(t(ex("s"), ex("p"), ex("o"))).unwrap());
    assert_eq!(g.len(), 1);
    assert!(!g.add(t(ex("s"), ex("p"), ex("o"))).unwrap());
    assert_eq!(g.len(), 1);
    assert!(g.add(t(ex("s"), ex("p"), ex("o2"))).unwrap());
    assert_eq!(g.len(), 2);
    assert!(g.contains(&t(ex("s"), ex("p"), ex("o"))));
    assert!(g.contains(&t(ex("s"), ex("p"), ex("o2"))));
    assert!(!g.contains(&t(ex("o"), ex("p"), ex("s"))));
}

#[test]
fn add_rejects_literal_subject() {
    let mut g = alice_bob();
    let before = g.sorted_triples();
    let err = g.insert(Term::plain("x"), ex("p"), ex("o")).unwrap_err();
    assert!(matches!(
        err,
        InsertError::Malformed(MalformedTriple {
            defect: TripleDefect::LiteralSubject,
            ..
        })
    ));
    assert_eq!(g.sorted_triples(), before);
    assert_eq!(g.term_id(&Term::plain("x")), None);
}

#[test]
fn add_rejects_non_iri_predicate() {
    let mut g = TripleStore::new();
    let b = g.bnode("p").unwrap();
    let err = g.insert(ex("s"), b, ex("o")).unwrap_err();
    assert!(matches!(
        err,
        InsertError::Malformed(MalformedTriple {
            defect: TripleDefect::NonIriPredicate(TermKind::BlankNode),
            ..
        })
    ));
    assert!(g.is_empty());
    assert_eq!(g.term_id(&ex("s")), None);
}

#[test]
fn add_rejects_foreign_blank_node() {
    let mut g1 = TripleStore::new();
    let g2 = TripleStore::new();
    let foreign = g2.bnode("x").unwrap();
    let err = g1.insert(ex("s"), ex("p"), foreign.clone()).unwrap_err();
    assert!(matches!(err, InsertError::Scope(_)), "{err}");
    let err = g1.insert(foreign, ex("p"), ex("o")).unwrap_err();
    assert!(err.to_string().contains("_:x"), "{err}");
    assert!(g1.is_empty());
}

#[test]
fn shared_scope() {
    let scope = BnodeScope::fresh();
    let mut g1 = TripleStore::with_scope(scope);
    let mut g2 = TripleStore::with_scope(scope);
    let b = g1.bnode("b").unwrap();
    assert_eq!(g2.bnode("b").unwrap(), b);
    g1.insert(b.clone(), ex("p"), ex("o")).unwrap();
    g2.insert(b, ex("p"), ex("o")).unwrap();
    assert!(g1.difference(&g2).is_empty());
}

#[test]
fn blank_nodes_from_different_stores_differ() {
    let g1 = TripleStore::new();
    let g2 = TripleStore::new();
    assert_ne!(g1.bnode("b").unwrap(), g2.bnode("b").unwrap());
}

#[test]
fn from_triples_stops_at_first_error() {
    let scope = BnodeScope::fresh();
    let ok = TripleStore::from_triples(
        scope,
        [t(ex("a"), ex("p"), ex("b")), t(ex("a"), ex("p"), ex("b"))],
    )
    .unwrap();
    assert_eq!(ok.len(), 1);
    assert_eq!(ok.scope(), scope);

    let err = TripleStore::from_triples(
        scope,
        [t(ex("a"), ex("p"), ex("b")), t(Term::plain("a"), ex("p"), ex("b"))],
    );
    assert!(err.is_err());
}

#[test]
fn typed_literal_datatype_is_interned() {
    let mut g = TripleStore::new();
    let lit = Term::Literal(Literal::typed("42", xsd::integer.iri()).unwrap());
    g.insert(ex("s"), ex("p"), lit).unwrap();
    assert!(g.iri_id(&xsd::integer.iri()).is_some());
    assert_eq!(g.len(), 1);
}

#[test_case(None, None, None, 5; "any")]
#[test_case(Some(ex("alice")), None, None, 2; "s")]
#[test_case(None, Some(ex("knows")), None, 2; "p")]
#[test_case(None, None, Some(ex("Person")), 2; "o")]
#[test_case(Some(ex("alice")), Some(ex("knows")), None, 1; "sp")]
#[test_case(None, Some(rdf::type_.term()), Some(ex("Person")), 2; "po")]
#[test_case(Some(ex("bob")), None, Some(ex("Person")), 1; "so")]
#[test_case(Some(ex("alice")), Some(ex("knows")), Some(ex("bob")), 1; "spo")]
#[test_case(Some(ex("alice")), Some(ex("knows")), Some(ex("alice")), 0; "spo absent")]
#[test_case(Some(ex("nobody")), None, None, 0; "unknown s")]
#[test_case(None, Some(rdfs::label.term()), None, 0; "unknown p")]
fn matching(s: Option<Term>, p: Option<Term>, o: Option<Term>, expected: usize) {
    let g = alice_bob();
    let got: Vec<_> = g.matching(s.as_ref(), p.as_ref(), o.as_ref()).collect();
    assert_eq!(got.len(), expected);
    for [ts, tp, to] in &got {
        assert!(s.as_ref().map_or(true, |s| s == *ts));
        assert!(p.as_ref().map_or(true, |p| p == *tp));
        assert!(o.as_ref().map_or(true, |o| o == *to));
    }
    // restartable and deterministic
    let again: Vec<_> = g.matching(s.as_ref(), p.as_ref(), o.as_ref()).collect();
    assert_eq!(got, again);
}

#[test]
fn sorted_triples_ignores_insertion_order() {
    let triples = alice_bob().sorted_triples();
    let scope = triples
        .iter()
        .find_map(|t| t.s().as_blank_node())
        .unwrap()
        .scope();
    let g1 = TripleStore::from_triples(scope, triples.iter().cloned()).unwrap();
    let g2 = TripleStore::from_triples(scope, triples.iter().rev().cloned()).unwrap();
    assert_eq!(g1.sorted_triples(), g2.sorted_triples());
    assert_eq!(g1.sorted_triples(), triples);
    assert!(triples.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn difference() {
    let g = alice_bob();
    let mut h = g.clone();
    let extra = t(ex("carol"), rdf::type_.term(), ex("Person"));
    h.add(extra.clone()).unwrap();

    assert!(g.difference(&g).is_empty());
    assert!(g.difference(&h).is_empty());
    let d = h.difference(&g);
    assert_eq!(d.sorted_triples(), vec![extra]);
    assert_eq!(d.scope(), h.scope());
    // inputs unchanged
    assert_eq!(g.len(), 5);
    assert_eq!(h.len(), 6);
}

#[test]
fn difference_with_empty() {
    let g = alice_bob();
    let empty = TripleStore::with_scope(g.scope());
    assert_eq!(g.difference(&empty).sorted_triples(), g.sorted_triples());
    assert!(empty.difference(&g).is_empty());
}

#[test]
fn difference_interns_literal_datatypes() {
    let mut g = TripleStore::new();
    let lit = Term::Literal(Literal::typed("42", xsd::integer.iri()).unwrap());
    g.insert(ex("a"), ex("age"), lit).unwrap();
    let d = g.difference(&TripleStore::with_scope(g.scope()));
    assert_eq!(d.sorted_triples(), g.sorted_triples());
    assert!(d.iri_id(&xsd::integer.iri()).is_some());
}

#[test]
fn id_level_api() {
    let mut g = alice_bob();
    let knows = g.term_id(&ex("knows")).unwrap();
    let alice = g.term_id(&ex("alice")).unwrap();
    let person = g.term_id(&ex("Person")).unwrap();
    let type_ = g.iri_id(&rdf::type_.iri()).unwrap();
    assert_eq!(g.term(knows), &ex("knows"));

    assert_eq!(g.ids().count(), 5);
    assert_eq!(g.ids_with_subject(alice).count(), 2);
    assert!(g.ids_with_predicate(knows).all(|[_, p, _]| p == knows));
    assert_eq!(g.ids_with_predicate(knows).count(), 2);
    assert_eq!(g.ids_with_predicate_object(type_, person).count(), 2);
    assert!(g.ids_with_object(person).all(|[_, _, o]| o == person));
    let mut preds: Vec<_> = g.predicate_ids().collect();
    assert_eq!(preds.len(), 3);
    preds.dedup();
    assert_eq!(preds.len(), 3);

    let class = g.intern_iri(&rdfs::Class.iri());
    assert_eq!(g.intern_iri(&rdfs::Class.iri()), class);
    assert_eq!(g.len(), 5);
    assert!(g.check_ids([person, type_, class]).is_ok());
    assert!(!g.contains_ids([person, type_, class]));
    assert!(g.insert_ids([person, type_, class]));
    assert!(!g.insert_ids([person, type_, class]));
    assert!(g.contains(&t(ex("Person"), rdf::type_.term(), rdfs::Class.term())));
    assert_eq!(
        g.matching(None, None, Some(&rdfs::Class.term())).count(),
        1
    );

    let carol = g.term_id(&Term::plain("Carol")).unwrap();
    assert_eq!(
        g.check_ids([carol, type_, class]),
        Err(TripleDefect::LiteralSubject)
    );
    assert!(g.terms().any(|(i, t)| i == carol && t == &Term::plain("Carol")));
}
