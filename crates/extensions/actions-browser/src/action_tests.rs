use super::*;
use crate::builder::ActionBuilder;
use crate::handlers::{
    ClickElementHandler, DoneHandler, GoBackHandler, GoToUrlHandler, ScrollToPercentHandler,
    ScrollToPercentInput, ScrollToTextHandler, ScrollToTextInput,
};

#[test]
fn test_prompt_lists_fields() {
    let action = Action::new(GoToUrlHandler).unwrap();
    assert_eq!(
        action.prompt(),
        "Navigate to URL in the current tab:\n\
         {go_to_url: {'intent': {'type': 'purpose of this action', 'optional': true}, \
         'url': {'type': 'url to navigate to', 'required': true}}}"
    );
}

#[test]
fn test_prompt_without_parameters() {
    let action = Action::new(GoBackHandler).unwrap();
    assert_eq!(action.prompt(), "Go back to the previous page:\n{go_back: {}}");
}

#[test]
fn test_describe_falls_back_to_type() {
    assert_eq!(describe(&json!({"type": ["integer", "null"]})), "integer");
    assert_eq!(describe(&json!({"type": "string"})), "string");
    assert_eq!(describe(&json!({})), "any");
}

#[test]
fn test_get_index_arg() {
    let click = Action::new(ClickElementHandler).unwrap();
    assert_eq!(click.get_index_arg(&json!({"index": 7})), Some(7));
    assert_eq!(click.get_index_arg(&json!({})), None);
    assert_eq!(click.get_index_arg(&json!("7")), None);
}

#[test]
fn test_get_index_arg_none_without_index() {
    // scroll actions take an optional index but are not indexed actions
    for action in ActionBuilder::build_default_actions().unwrap() {
        if !action.has_index() {
            assert_eq!(action.get_index_arg(&json!({"index": 3})), None, "{}", action.name());
        }
    }
}

#[test]
fn test_set_index_arg() {
    let click = Action::new(ClickElementHandler).unwrap();
    let mut input = json!({"index": 1, "intent": "x"});
    assert!(click.set_index_arg(&mut input, 9));
    assert_eq!(input["index"], 9);
    assert_eq!(input["intent"], "x");

    let mut not_object = json!([1]);
    assert!(!click.set_index_arg(&mut not_object, 2));
}

#[test]
fn test_set_index_arg_without_index() {
    let done = Action::new(DoneHandler).unwrap();
    let mut input = json!({"text": "x"});
    assert!(!done.set_index_arg(&mut input, 2));
    assert!(input.get("index").is_none());
}

#[test]
fn test_range_checks() {
    let too_far = ScrollToPercentInput {
        intent: None,
        y_percent: 101,
        index: None,
    };
    assert!(ScrollToPercentHandler::check(&too_far).is_err());

    let zeroth = ScrollToTextInput {
        intent: None,
        text: "x".to_string(),
        nth: 0,
    };
    assert!(ScrollToTextHandler::check(&zeroth).is_err());
}
