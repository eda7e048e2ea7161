// Integration tests for decision-tree preference elicitation
use route_advisor::elicitation::{
    elicit_preferences, DecisionTreeBuilder, ScriptedAnswers, MODE_QUESTION, WEIGHT_QUESTIONS,
};
use route_advisor::{AnswerSource, DecisionTree, PreferenceVector, TransportMode};

/// Records every question asked while replaying a script
struct RecordingAnswers {
    script: ScriptedAnswers,
    asked: Vec<(String, Vec<String>)>,
}

impl AnswerSource for RecordingAnswers {
    fn ask(&mut self, question: &str, options: &[&str]) -> route_advisor::Result<String> {
        self.asked.push((
            question.to_string(),
            options.iter().map(|o| o.to_string()).collect(),
        ));
        self.script.ask(question, options)
    }
}

// valid answer prefixes leading to each leaf of the standard tree
const LEAF_PATHS: [(&[&str], &str); 7] = [
    (&["s", "y"], "fast on a budget"),
    (&["speed", "no"], "fastest"),
    (&["p", "yes"], "cheapest"),
    (&["pri", "n"], "economy"),
    (&["dist"], "shortest"),
    (&["b"], "balanced"),
    (&["cu", "2", "1", "1"], "custom"),
];

#[test]
fn test_every_leaf_reachable_despite_invalid_answers() {
    let tree = DecisionTree::standard();
    let junk = ["", "   ", "xyz", "speedboat", "-3"];

    for (path, profile) in LEAF_PATHS {
        for noise in 0..junk.len() {
            let mut script = Vec::new();
            for answer in path {
                script.extend(junk.iter().take(noise).copied());
                script.push(*answer);
            }
            script.extend(junk.iter().take(noise).copied());
            script.push("car");

            let mut answers = ScriptedAnswers::new(script);
            let preferences = elicit_preferences(&tree, &mut answers).unwrap();

            assert_eq!(preferences.profile, profile);
            assert_eq!(preferences.preferred_mode, TransportMode::Car);
            assert_eq!(answers.remaining(), 0);
        }
    }
}

#[test]
fn test_questions_offer_sorted_options() {
    let tree = DecisionTree::standard();
    let mut answers = RecordingAnswers {
        script: ScriptedAnswers::new(["nonsense", "speed", "no", "a"]),
        asked: Vec::new(),
    };

    let preferences = elicit_preferences(&tree, &mut answers).unwrap();
    assert_eq!(preferences, PreferenceVector::new("fastest", 1.0, 0.0, 0.0));

    let questions: Vec<&str> = answers.asked.iter().map(|(q, _)| q.as_str()).collect();
    assert_eq!(
        questions,
        vec![
            "What matters most on this trip?",
            "What matters most on this trip?",
            "Is the budget tight?",
            MODE_QUESTION,
        ]
    );
    assert_eq!(
        answers.asked[3].1,
        vec!["any", "bus", "car", "ferry", "plane", "train", "walk"]
    );
}

#[test]
fn test_custom_branch_asks_for_each_weight() {
    let tree = DecisionTree::standard();
    let mut answers = RecordingAnswers {
        script: ScriptedAnswers::new(["CUSTOM", "lots", "2", "1", "1", "w"]),
        asked: Vec::new(),
    };

    let preferences = elicit_preferences(&tree, &mut answers).unwrap();
    assert_eq!(
        preferences,
        PreferenceVector::new("custom", 0.5, 0.25, 0.25).with_mode(TransportMode::Walk)
    );

    let questions: Vec<&str> = answers.asked.iter().map(|(q, _)| q.as_str()).collect();
    assert_eq!(
        questions,
        vec![
            "What matters most on this trip?",
            WEIGHT_QUESTIONS[0],
            WEIGHT_QUESTIONS[0],
            WEIGHT_QUESTIONS[1],
            WEIGHT_QUESTIONS[2],
            MODE_QUESTION,
        ]
    );
    assert!(answers.asked[1].1.is_empty());
}

#[test]
fn test_ambiguous_prefix_resolves_lexicographically() {
    let mut builder = DecisionTreeBuilder::new();
    let cheap = builder.leaf(PreferenceVector::new("cheap", 0.0, 1.0, 0.0));
    let careful = builder.leaf(PreferenceVector::new("careful", 0.0, 0.0, 1.0));
    let root = builder.question("Style?", &[("cheap", cheap), ("careful", careful)]);
    let tree = builder.build(root);

    let mut answers = ScriptedAnswers::new(["c", "f"]);
    let preferences = elicit_preferences(&tree, &mut answers).unwrap();
    assert_eq!(preferences.profile, "careful");
    assert_eq!(preferences.preferred_mode, TransportMode::Ferry);
}

#[test]
fn test_elicited_preferences_drive_search() {
    let mut network = route_advisor::TransportNetwork::new();
    let a = network.add_location("A", 0.0, 0.0);
    let b = network.add_location("B", 0.0, 1.0);
    let c = network.add_location("C", 0.0, 2.0);
    network.add_route(a, b, 1.0, 10.0, 5.0, TransportMode::Train).unwrap();
    network.add_route(b, c, 1.0, 10.0, 5.0, TransportMode::Train).unwrap();
    network.add_route(a, c, 3.0, 30.0, 1.0, TransportMode::Plane).unwrap();

    let tree = DecisionTree::standard();
    let mut answers = ScriptedAnswers::new(["price", "yes", "any"]);
    let preferences = elicit_preferences(&tree, &mut answers).unwrap();

    let route = network.find_path(a, c, &preferences).unwrap().unwrap();
    assert_eq!(route.stops(), vec![a, c]);
}
