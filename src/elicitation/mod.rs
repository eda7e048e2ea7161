// Preference elicitation: walks the decision tree with answers from a collaborator

mod tree;

pub use self::tree::{
    canonical_order, select_option, Branch, DecisionTree, DecisionTreeBuilder, Node, NodeId,
};

use crate::error::{Result, RouteError};
use crate::models::{PreferenceVector, TransportMode};
use log::{debug, warn};
use std::collections::VecDeque;

pub const MODE_QUESTION: &str = "Which transport mode do you prefer?";

/// Questions of the custom weights round, asked in this order
pub const WEIGHT_QUESTIONS: [&str; 3] = [
    "How much weight should travel time get?",
    "How much weight should cost get?",
    "How much weight should distance get?",
];

/// Supplies raw answers to questions, e.g. an interactive prompt
pub trait AnswerSource {
    /// Ask `question` offering `options`; the answer need not be valid
    fn ask(&mut self, question: &str, options: &[&str]) -> Result<String>;
}

/// Answers taken from a fixed list, in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn ask(&mut self, question: &str, _options: &[&str]) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| RouteError::AnswerSource(format!("no answer left for `{question}`")))
    }
}

/// Runs both elicitation rounds: the decision tree for the weights, then the
/// preferred transport mode. Unmatched answers are asked again.
pub fn elicit_preferences<A: AnswerSource + ?Sized>(
    tree: &DecisionTree,
    source: &mut A,
) -> Result<PreferenceVector> {
    let mut preferences = elicit_weights(tree, source)?;
    preferences.preferred_mode = elicit_mode(source)?;
    debug!("Elicited preferences: {}", preferences);
    Ok(preferences)
}

/// Walks the tree from the root until a leaf or the custom node is reached
pub fn elicit_weights<A: AnswerSource + ?Sized>(
    tree: &DecisionTree,
    source: &mut A,
) -> Result<PreferenceVector> {
    let mut current = tree.root();
    loop {
        match tree.node(current) {
            Some(Node::Leaf(preferences)) => return Ok(preferences.clone()),
            Some(Node::Custom) => return elicit_custom_weights(source),
            Some(Node::Question { question, .. }) => {
                let options = tree.options(current);
                let answer = source.ask(question, &options)?;
                match tree.step(current, &answer) {
                    Some(next) => current = next,
                    None => warn!("`{}` does not match any of {:?}", answer.trim(), options),
                }
            }
            None => return Err(RouteError::MissingNode(current)),
        }
    }
}

/// Asks for the time, cost and distance weights in turn.
///
/// Each answer must parse as a finite non-negative number or it is asked
/// again. If all three come back zero the whole round starts over.
pub fn elicit_custom_weights<A: AnswerSource + ?Sized>(
    source: &mut A,
) -> Result<PreferenceVector> {
    loop {
        let mut weights = [0.0; 3];
        for (weight, question) in weights.iter_mut().zip(WEIGHT_QUESTIONS) {
            *weight = ask_weight(source, question)?;
        }
        let [time, cost, distance] = weights;
        if time + cost + distance > 0.0 {
            return Ok(PreferenceVector::custom(time, cost, distance));
        }
        warn!("At least one weight must be above zero");
    }
}

fn ask_weight<A: AnswerSource + ?Sized>(source: &mut A, question: &str) -> Result<f64> {
    loop {
        let answer = source.ask(question, &[])?;
        match answer.trim().parse::<f64>() {
            Ok(weight) if weight.is_finite() && weight >= 0.0 => return Ok(weight),
            _ => warn!("`{}` is not a non-negative number", answer.trim()),
        }
    }
}

/// Asks for a transport mode until one matches; `any` means no preference
pub fn elicit_mode<A: AnswerSource + ?Sized>(source: &mut A) -> Result<TransportMode> {
    let labels: Vec<&str> = TransportMode::ALL.iter().map(|m| m.as_str()).collect();
    let options: Vec<&str> = canonical_order(&labels)
        .into_iter()
        .map(|index| labels[index])
        .collect();

    loop {
        let answer = source.ask(MODE_QUESTION, &options)?;
        match select_option(&labels, &answer) {
            Some(index) => return Ok(TransportMode::ALL[index]),
            None => warn!("`{}` is not a transport mode", answer.trim()),
        }
    }
}
