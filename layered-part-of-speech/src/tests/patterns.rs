use crate::{tag_text, PatternQuery, POSTagResolver, TagError};
use layered_transcript::create_line_from_string;

fn texts(pattern: &str, text: &str) -> Vec<String> {
    let query: PatternQuery = pattern.parse().unwrap();
    query.find_texts(&tag_text(text).unwrap())
}

#[test]
fn test_subject_verb() {
    assert_eq!(texts("(#Pronoun|#Noun) #Verb+", "I do not want that"), vec!["I do"]);
    assert_eq!(
        texts("(#Pronoun|#Noun) #Verb+", "I will see you tomorrow"),
        vec!["I will see"]
    );
}

#[test]
fn test_imperative() {
    assert_eq!(texts("#Verb #Noun+", "bring me the book now"), vec!["bring me"]);
}

#[test]
fn test_question_like_takes_optional_terms_greedily() {
    assert_eq!(
        texts(
            "(#QuestionWord|#Modal|#Verb) #Pronoun? #Verb? #Noun+",
            "can you help me please"
        ),
        vec!["can you help me"]
    );
}

#[test]
fn test_compound_statement() {
    assert_eq!(
        texts(
            "#Noun+ #Verb+ #Conjunction #Noun+ #Verb+",
            "Mom cooked and Dad cleaned"
        ),
        vec!["Mom cooked and Dad cleaned"]
    );
}

#[test]
fn test_matches_keep_trailing_punctuation() {
    assert_eq!(
        texts("(#Pronoun|#Noun) #Verb+", "I went home. You stayed."),
        vec!["I went", "You stayed."]
    );
}

#[test]
fn test_matches_stay_inside_sentences() {
    assert!(texts("(#Pronoun|#Noun) #Verb+", "Give it to him. Run fast").is_empty());

    // Without sentence boundaries the whole line is one sentence.
    let untokenized = create_line_from_string("Give it to him. Run fast").run(&POSTagResolver);
    let query: PatternQuery = "(#Pronoun|#Noun) #Verb+".parse().unwrap();
    assert_eq!(query.find_texts(&untokenized), vec!["him. Run"]);
}

#[test]
fn test_anchor_is_per_sentence() {
    let query: PatternQuery = "^#Verb".parse().unwrap();
    let line = tag_text("Hello there. Bring it now").unwrap();
    assert!(query.is_found(&line));
    assert_eq!(query.find_texts(&line), vec!["Bring"]);

    assert!(!query.is_found(&tag_text("I bring it").unwrap()));
}

#[test]
fn test_literal_words_ignore_case() {
    let query: PatternQuery = "(no|not|never|none)".parse().unwrap();
    assert!(query.is_found(&tag_text("I do NOT know").unwrap()));
    assert!(!query.is_found(&tag_text("I know").unwrap()));
}

#[test]
fn test_tag_text_rejects_only_blank_input() {
    assert_eq!(tag_text("").unwrap_err(), TagError::Empty);
    assert_eq!(tag_text(" \t ").unwrap_err(), TagError::Empty);
    assert_eq!(tag_text("\u{0}\u{7} ").unwrap_err(), TagError::Empty);
    assert!(tag_text("line one\nline two").is_ok());
}

#[test]
fn test_control_characters_read_as_spaces() {
    let line = tag_text("hi\u{0}there").unwrap();
    assert_eq!(line.text(), "hi there");
    assert_eq!(
        texts("(#Pronoun|#Noun) #Verb+", "I want\u{7}water"),
        vec!["I want"]
    );
}
