use super::*;
use crate::ns::{rdf, xsd};
use test_case::test_case;

fn ex(suffix: &str) -> Term {
    Term::iri(&format!("http://example.org/{suffix}")).unwrap()
}

#[test]
fn literal_with_datatype_and_language_is_malformed() {
    let res = Literal::new("chat", Some(xsd::string.iri()), Some("fr"));
    assert!(matches!(
        res,
        Err(MalformedTerm::DatatypeAndLanguage { ref lex, ref tag, .. }) if lex == "chat" && tag == "fr"
    ));
}

#[test]
fn literal_with_invalid_language_is_malformed() {
    let res = Literal::new("chat", None, Some("not a tag"));
    assert!(matches!(res, Err(MalformedTerm::LanguageTag(_))));
}

#[test_case(Literal::typed("chat", rdf::langString.iri()); "typed")]
#[test_case(Literal::new("chat", Some(rdf::langString.iri()), None); "new")]
fn lang_string_without_language_is_malformed(res: Result<Literal, MalformedTerm>) {
    assert!(matches!(
        res,
        Err(MalformedTerm::LangStringWithoutLanguage { ref lex }) if lex == "chat"
    ));
}

#[test]
fn lang_string_with_language_is_fine() {
    let lit = Literal::new("chat", None, Some("fr")).unwrap();
    assert_eq!(lit.datatype(), None);
    assert!(lit.language_tag().is_some());
}

#[test_case(None, None; "plain")]
#[test_case(Some("http://www.w3.org/2001/XMLSchema#integer"), None; "typed")]
#[test_case(None, Some("en"); "language")]
fn literal_constructors_agree(datatype: Option<&str>, tag: Option<&str>) {
    let dt = datatype.map(|iri| Iri::new(iri).unwrap());
    let lit = Literal::new("42", dt.clone(), tag).unwrap();
    let expected = match (dt, tag) {
        (None, None) => Literal::plain("42"),
        (Some(dt), None) => Literal::typed("42", dt).unwrap(),
        (None, Some(tag)) => Literal::lang("42", tag).unwrap(),
        _ => unreachable!(),
    };
    assert_eq!(lit, expected);
    assert_eq!(lit.lexical_form(), "42");
}

#[test]
fn literal_equality_is_structural() {
    let typed = Term::Literal(Literal::typed("a", xsd::string.iri()).unwrap());
    let plain = Term::plain("a");
    let lang = Term::Literal(Literal::lang("a", "en").unwrap());
    let lang_upper = Term::Literal(Literal::lang("a", "EN").unwrap());
    assert_ne!(typed, plain);
    assert_ne!(plain, lang);
    assert_ne!(typed, lang);
    assert_eq!(lang, lang_upper);
    assert_eq!(Term::plain("a"), plain);
}

#[test]
fn cross_kind_order() {
    let scope = BnodeScope::fresh();
    let iri = ex("z");
    let bnode = Term::BlankNode(scope.bnode("a").unwrap());
    let literal = Term::plain("a");
    assert!(iri < bnode);
    assert!(bnode < literal);
    assert!(iri < literal);

    let mut terms = vec![literal.clone(), bnode.clone(), iri.clone()];
    terms.sort();
    assert_eq!(terms, vec![iri, bnode, literal]);
}

#[test]
fn same_kind_order() {
    assert!(ex("a") < ex("b"));
    assert!(Term::plain("a") < Term::plain("b"));
    let scope = BnodeScope::fresh();
    let b1 = Term::BlankNode(scope.bnode("b1").unwrap());
    let b2 = Term::BlankNode(scope.bnode("b2").unwrap());
    assert!(b1 < b2);
}

#[test]
fn blank_nodes_from_different_scopes_are_never_equal() {
    let b1 = Term::BlankNode(BnodeScope::fresh().bnode("x").unwrap());
    let b2 = Term::BlankNode(BnodeScope::fresh().bnode("x").unwrap());
    assert_ne!(b1, b2);
    // but the order remains total
    assert!(b1 < b2 || b2 < b1);
}

#[test]
fn kinds() {
    let scope = BnodeScope::fresh();
    assert_eq!(ex("a").kind(), TermKind::Iri);
    assert_eq!(
        Term::BlankNode(scope.bnode("a").unwrap()).kind(),
        TermKind::BlankNode
    );
    assert_eq!(Term::plain("a").kind(), TermKind::Literal);
    assert!(ex("a").as_iri().is_some());
    assert!(ex("a").as_literal().is_none());
    assert!(Term::plain("a").is_literal());
}

#[test_case(Term::from(rdf::type_.iri()), "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"; "iri")]
#[test_case(Term::plain("hello"), r#""hello""#; "plain literal")]
#[test_case(Term::plain("a \"quoted\"\nline\\"), r#""a \"quoted\"\nline\\""#; "escaped literal")]
#[test_case(Term::Literal(Literal::typed("1", xsd::integer.iri()).unwrap()), r#""1"^^<http://www.w3.org/2001/XMLSchema#integer>"#; "typed literal")]
#[test_case(Term::Literal(Literal::lang("chat", "FR").unwrap()), r#""chat"@fr"#; "language literal")]
fn display(term: Term, expected: &str) {
    assert_eq!(term.to_string(), expected);
}

#[test]
fn display_bnode() {
    let bn = Term::BlankNode(BnodeScope::fresh().bnode("b1").unwrap());
    assert_eq!(bn.to_string(), "_:b1");
}

#[test]
fn malformed_iri() {
    assert!(matches!(Term::iri("not an iri"), Err(MalformedTerm::Iri(_))));
}
