use layout_engine::{
    compute_layout, CanvasSize, LayoutConfig, LayoutNotice, LineClass, LineTag, TextRole,
    VisualElement,
};
use proptest::prelude::*;
use quiz_model::{AnswerLetter, QuestionRecord};
use text_engine::{FontSet, FontSizes};

fn fonts() -> FontSet {
    FontSet::synthetic(&FontSizes::default())
}

#[test]
fn sample_record_lays_out_in_order() {
    let record = QuestionRecord::sample();
    let plan = compute_layout(&record, &fonts(), CanvasSize::default(), &LayoutConfig::default());

    assert!(plan.notices().is_empty());
    assert_eq!(plan.elements().len(), 7);
    assert!(matches!(
        &plan.elements()[0],
        VisualElement::TextBlock(block) if block.role == TextRole::Prompt
    ));
    assert!(matches!(
        &plan.elements()[1],
        VisualElement::TextBlock(block) if block.role == TextRole::Title
    ));
    assert!(matches!(&plan.elements()[2], VisualElement::CodeBlock(_)));

    let indices: Vec<usize> = plan.option_boxes().map(|o| o.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn elements_never_overlap() {
    let record = QuestionRecord::sample();
    let plan = compute_layout(&record, &fonts(), CanvasSize::default(), &LayoutConfig::default());

    for pair in plan.elements().windows(2) {
        assert!(pair[0].bounds().bottom() <= pair[1].bounds().y);
    }
}

#[test]
fn layout_is_deterministic() {
    let record = QuestionRecord::sample();
    let config = LayoutConfig::default();
    let first = compute_layout(&record, &fonts(), CanvasSize::default(), &config);
    let second = compute_layout(&record, &fonts(), CanvasSize::default(), &config);
    assert_eq!(first, second);
}

#[test]
fn commented_code_line_stays_a_comment() {
    let record = QuestionRecord::new(
        "Which line runs?",
        "# if True: print('x')\nfor i in range(3):\n    s = \"a\"\nx = 1",
        ["A) 1", "B) 2", "C) 3", "D) 4"],
        AnswerLetter::B,
    );
    let plan = compute_layout(&record, &fonts(), CanvasSize::default(), &LayoutConfig::default());
    let classes: Vec<LineTag> = plan.code_block().unwrap().lines.iter().map(|l| l.tag).collect();
    assert_eq!(
        classes,
        vec![
            LineTag::Code(LineClass::Comment),
            LineTag::Code(LineClass::Keyword),
            LineTag::Code(LineClass::String),
            LineTag::Code(LineClass::Default),
        ]
    );
}

#[test]
fn plan_serializes_to_json() {
    let plan = compute_layout(
        &QuestionRecord::sample(),
        &fonts(),
        CanvasSize::default(),
        &LayoutConfig::default(),
    );
    let json = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["elements"][2]["type"], "CodeBlock");
    assert_eq!(json["canvas"]["width"], 1080);
}

#[test]
fn overflow_is_reported_not_fatal() {
    let long = "this option just keeps going ".repeat(12);
    let record = QuestionRecord {
        question: Some("Overflow?".into()),
        code: Some("pass".into()),
        options: ["A", "B", "C", "D"]
            .iter()
            .map(|letter| format!("{}) {}", letter, long))
            .collect(),
        correct_answer: AnswerLetter::D,
    };
    let canvas = CanvasSize::new(1080, 1400);
    let plan = compute_layout(&record, &fonts(), canvas, &LayoutConfig::default());

    let overflow = plan
        .notices()
        .iter()
        .find(|n| matches!(n, LayoutNotice::ContentOverflow { .. }))
        .expect("overflow notice");
    if let LayoutNotice::ContentOverflow { first_dropped, dropped } = overflow {
        assert_eq!(*first_dropped, plan.option_boxes().count());
        assert_eq!(first_dropped + dropped, 4);
    }
}

proptest! {
    #[test]
    fn options_stay_above_bottom_margin(
        question in "[a-z ]{0,200}",
        option_len in 1usize..400,
        height in 600u32..2400,
    ) {
        let text = "x".repeat(option_len);
        let options: Vec<String> = ["A", "B", "C", "D"]
            .iter()
            .map(|l| format!("{}) {}", l, text))
            .collect();
        let record = QuestionRecord {
            question: Some(question),
            code: Some("def f():\n    return 1".into()),
            options,
            correct_answer: AnswerLetter::A,
        };
        let config = LayoutConfig::default();
        let canvas = CanvasSize::new(1080, height);
        let plan = compute_layout(&record, &fonts(), canvas, &config);

        let limit = height as f32 - config.bottom_margin;
        let mut last_bottom = 0.0f32;
        for option in plan.option_boxes() {
            prop_assert!(option.bounds.bottom() <= limit);
            prop_assert!(option.bounds.y >= last_bottom);
            last_bottom = option.bounds.bottom();
        }
        prop_assert_eq!(plan.option_boxes().count() + plan.dropped_options(), 4);
    }
}
