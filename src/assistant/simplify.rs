// ABOUTME: Rule-based rewrite of step-numbered cooking instructions into one sentence
// ABOUTME: Applies ordered regex cleanup and phrase tables, then maps each step to a short action
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Instruction simplifier
//!
//! Pure and deterministic. Each `Step N:` segment is cleaned up, cut to its
//! first sentence, shortened with a phrase table, and classified against an
//! ordered list of action rules. The per-step actions are joined into one
//! sentence.

use regex::{NoExpand, Regex, RegexBuilder};
use std::sync::LazyLock;

/// Words kept when no action rule matches a long step
const DEFAULT_ACTION_WORDS: usize = 8;

/// Actions shorter than this many characters are dropped
const MIN_ACTION_CHARS: usize = 4;

/// Transition words and vague qualifiers, applied in order to each step
const CLEANUP_TABLE: &[(&str, &str)] = &[
    (r"First,|Meanwhile,|Then,|Next,|After that,|Finally,", ""),
    (r"In a large pot,|In a separate pot,|In the ", ""),
    (r"for at least|approximately|about", "for"),
    (r"completely|thoroughly|carefully", ""),
];

/// Ingredient-list abbreviations, applied in order to a step's main action
///
/// The herb pattern runs first, so the full garnish list only matches text the
/// herb pattern left intact.
const PHRASE_TABLE: &[(&str, &str)] = &[
    (
        r"in yogurt, ginger-garlic paste, red chili powder, turmeric,? and salt",
        "in yogurt and spices",
    ),
    (
        r"like bay leaves, cinnamon, cardamom,? and cloves",
        "and whole spices",
    ),
    (
        r"fresh mint leaves, coriander leaves,? and saffron soaked in milk",
        "herbs and saffron milk",
    ),
    (
        r"the reserved fried onions, fresh mint leaves, coriander leaves, and saffron soaked in milk",
        "fried onions, herbs, and saffron",
    ),
    (r"with a tight-fitting lid", ""),
    (r"until they turn|until it is|until the", "until"),
];

static STEP_MARKER: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: Step 1:, step 12:
    RegexBuilder::new(r"Step \d+:")
        .case_insensitive(true)
        .build()
        .ok()
});

static CLEANUP_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(CLEANUP_TABLE));

static PHRASE_RULES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(PHRASE_TABLE));

fn compile_table(table: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    table
        .iter()
        .filter_map(|(pattern, replacement)| {
            RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .ok()
                .map(|regex| (regex, *replacement))
        })
        .collect()
}

/// Case-sensitive keyword condition over a main action
#[derive(Debug)]
enum Condition {
    Has(&'static str),
    All(&'static [Condition]),
    Any(&'static [Condition]),
}

impl Condition {
    fn matches(&self, text: &str) -> bool {
        match self {
            Self::Has(keyword) => text.contains(keyword),
            Self::All(conditions) => conditions.iter().all(|c| c.matches(text)),
            Self::Any(conditions) => conditions.iter().any(|c| c.matches(text)),
        }
    }
}

#[derive(Debug)]
struct ActionRule {
    when: Condition,
    action: &'static str,
}

/// First match wins
const ACTION_RULES: &[ActionRule] = &[
    ActionRule {
        when: Condition::Has("marinate"),
        action: "marinate chicken in yogurt and spices",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("soak"), Condition::Has("rice")]),
        action: "soak rice for 20 minutes",
    },
    ActionRule {
        when: Condition::Any(&[
            Condition::Has("heat oil"),
            Condition::Has("add whole spices"),
        ]),
        action: "heat oil and add whole spices",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("fry"), Condition::Has("onions")]),
        action: "fry onions until golden",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("remove"), Condition::Has("onions")]),
        action: "set aside half for garnish",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("cook"), Condition::Has("chicken")]),
        action: "cook marinated chicken for 5-7 minutes",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("boil"), Condition::Has("rice")]),
        action: "cook rice until 70% done",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("layer"), Condition::Has("rice")]),
        action: "layer rice over chicken",
    },
    ActionRule {
        when: Condition::Any(&[
            Condition::Has("garnish"),
            Condition::All(&[
                Condition::Has("add"),
                Condition::Any(&[Condition::Has("onions"), Condition::Has("herbs")]),
            ]),
        ]),
        action: "add fried onions, herbs, and saffron",
    },
    ActionRule {
        when: Condition::All(&[Condition::Has("cover"), Condition::Has("cook")]),
        action: "cover and cook on low heat for 20-25 minutes",
    },
    ActionRule {
        when: Condition::Has("rest"),
        action: "let rest for 5 minutes",
    },
    ActionRule {
        when: Condition::Any(&[Condition::Has("mix"), Condition::Has("serve")]),
        action: "mix gently and serve hot",
    },
];

/// Condense instructions into a single sentence
///
/// Empty input yields `"."`.
#[must_use]
pub fn simplify_instructions(instructions: &str) -> String {
    let actions: Vec<String> = split_steps(instructions)
        .into_iter()
        .map(step_action)
        .filter(|action| action.chars().count() >= MIN_ACTION_CHARS)
        .collect();

    format!("{}.", capitalize_first(&actions.join(", ")))
}

/// Split on `Step N:` markers, keeping any preamble, dropping blank segments
fn split_steps(text: &str) -> Vec<&str> {
    let segments: Vec<&str> = STEP_MARKER
        .as_ref()
        .map_or_else(|| vec![text], |marker| marker.split(text).collect());

    segments
        .into_iter()
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

fn step_action(step: &str) -> String {
    let cleaned = rewrite(&CLEANUP_RULES, step);
    let main_action = cleaned.split('.').next().unwrap_or_default().trim();
    let main_action = rewrite(&PHRASE_RULES, main_action);

    classify(&main_action)
}

fn rewrite(rules: &[(Regex, &str)], text: &str) -> String {
    let rewritten = rules
        .iter()
        .fold(text.to_owned(), |acc, (regex, replacement)| {
            regex.replace_all(&acc, NoExpand(replacement)).into_owned()
        });
    collapse_whitespace(&rewritten)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn classify(main_action: &str) -> String {
    if let Some(rule) = ACTION_RULES.iter().find(|rule| rule.when.matches(main_action)) {
        return rule.action.to_owned();
    }

    // Long actions are truncated as written; short ones are lowercased whole
    let words: Vec<&str> = main_action.split(' ').collect();
    if words.len() > DEFAULT_ACTION_WORDS {
        words
            .into_iter()
            .take(DEFAULT_ACTION_WORDS)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        main_action.to_lowercase()
    }
}

pub(crate) fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
