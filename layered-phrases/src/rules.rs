//! The rule table shared by extraction, filtering and scoring.
//!
//! Every rule is a tag pattern written in [`PatternQuery`] syntax. Patterns
//! are parsed once on first use.

use layered_part_of_speech::PatternQuery;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub description: &'static str,
}

/// Patterns whose matches become candidates alongside whole sentences.
pub const EXTRACTION_RULES: &[PhraseRule] = &[
    PhraseRule {
        name: "subject-verb",
        pattern: "(#Pronoun|#Noun) #Verb+",
        description: "a subject followed by one or more verbs",
    },
    PhraseRule {
        name: "question-like",
        pattern: "(#QuestionWord|#Modal|#Verb) #Pronoun? #Verb? #Noun+",
        description: "a question word, modal or verb leading into a noun",
    },
    PhraseRule {
        name: "imperative",
        pattern: "#Verb #Noun+",
        description: "a verb followed by its object",
    },
    PhraseRule {
        name: "compound",
        pattern: "#Noun+ #Verb+ #Conjunction #Noun+ #Verb+",
        description: "two subject-verb clauses joined by a conjunction",
    },
];

/// A kept phrase matches at least one of these.
pub const STRUCTURE_RULES: &[PhraseRule] = &[
    PhraseRule {
        name: "has-subject-verb",
        pattern: "(#Pronoun|#Noun) #Verb",
        description: "a subject directly followed by a verb",
    },
    PhraseRule {
        name: "opens-with-question",
        pattern: "^(#QuestionWord|#Modal|#Verb)",
        description: "opens with a question word, modal or verb",
    },
    PhraseRule {
        name: "opens-with-verb",
        pattern: "^#Verb",
        description: "opens with a verb",
    },
];

pub const HAS_VERB: PhraseRule = PhraseRule {
    name: "has-verb",
    pattern: "#Verb",
    description: "contains a verb anywhere",
};

pub const FULL_CLAUSE: PhraseRule = PhraseRule {
    name: "full-clause",
    pattern: "(#Pronoun|#Noun) #Verb #Noun?",
    description: "subject, verb and an optional object",
};

pub const OPENS_WITH_QUESTION_WORD: PhraseRule = PhraseRule {
    name: "opens-with-question-word",
    pattern: "^#QuestionWord",
    description: "opens with who, what, where, when, why or how",
};

pub const OPENS_WITH_VERB: PhraseRule = PhraseRule {
    name: "opens-with-verb",
    pattern: "^#Verb",
    description: "opens with a verb, read as an instruction",
};

/// A [`PhraseRule`] with its pattern parsed.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: PhraseRule,
    pub query: PatternQuery,
}

impl CompiledRule {
    fn compile(rule: PhraseRule) -> Self {
        let query = rule
            .pattern
            .parse()
            .expect("built-in phrase patterns always parse");
        CompiledRule { rule, query }
    }
}

pub(crate) struct Rules {
    pub extraction: Vec<CompiledRule>,
    pub structure: Vec<CompiledRule>,
    pub has_verb: CompiledRule,
    pub full_clause: CompiledRule,
    pub opens_with_question_word: CompiledRule,
    pub opens_with_verb: CompiledRule,
}

pub(crate) static RULES: Lazy<Rules> = Lazy::new(|| Rules {
    extraction: EXTRACTION_RULES.iter().copied().map(CompiledRule::compile).collect(),
    structure: STRUCTURE_RULES.iter().copied().map(CompiledRule::compile).collect(),
    has_verb: CompiledRule::compile(HAS_VERB),
    full_clause: CompiledRule::compile(FULL_CLAUSE),
    opens_with_question_word: CompiledRule::compile(OPENS_WITH_QUESTION_WORD),
    opens_with_verb: CompiledRule::compile(OPENS_WITH_VERB),
});

#[cfg(test)]
mod tests {
    use super::*;
    use layered_part_of_speech::tag_text;

    #[test]
    fn test_every_rule_parses_and_prints_back() {
        let scoring = [HAS_VERB, FULL_CLAUSE, OPENS_WITH_QUESTION_WORD, OPENS_WITH_VERB];
        for rule in EXTRACTION_RULES.iter().chain(STRUCTURE_RULES).chain(&scoring) {
            let query: PatternQuery = rule.pattern.parse().unwrap();
            assert_eq!(query.to_string(), rule.pattern, "{}", rule.name);
        }
        assert_eq!(RULES.extraction.len(), 4);
        assert_eq!(RULES.structure.len(), 3);
    }

    #[test]
    fn test_extraction_matches() {
        let line = tag_text("Where did you put the keys?").unwrap();
        let found: Vec<(&str, Vec<String>)> = RULES
            .extraction
            .iter()
            .map(|compiled| (compiled.rule.name, compiled.query.find_texts(&line)))
            .collect();
        assert_eq!(
            found,
            vec![
                ("subject-verb", vec!["you put".to_string()]),
                ("question-like", vec!["Where did you".to_string()]),
                ("imperative", vec!["did you".to_string()]),
                ("compound", vec![]),
            ]
        );
    }
}
