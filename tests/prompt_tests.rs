use mqdigest::prompt::{SUMMARY_PROMPT, build_input, first_line};

#[test]
fn test_build_input_wraps_message_in_prompt() {
    let message = "{1:F01TESTBANK0001000001}{4:\n:20:REF1\n-}";
    let input = build_input(message);

    assert!(input.starts_with(SUMMARY_PROMPT));
    assert!(input.contains(message));
    assert!(input.ends_with("\nOutput:"));
}

#[test]
fn test_prompt_carries_the_worked_examples() {
    // The few-shot examples are what keep the model's answer to one line;
    // losing them silently would degrade every summary.
    assert!(SUMMARY_PROMPT.contains("The following is a SWIFT MT103 message."));
    assert!(SUMMARY_PROMPT.contains("MR. JOHN DOE"));
    assert!(SUMMARY_PROMPT.contains("George Lucas"));
    assert!(SUMMARY_PROMPT.ends_with("Input: "));
}

#[test]
fn test_first_line_trims_at_newline() {
    assert_eq!(
        first_line("On 01/05/23, A sent 10 GBP to B.\nSecond line.\nThird."),
        "On 01/05/23, A sent 10 GBP to B."
    );
}

#[test]
fn test_first_line_without_newline_is_unchanged() {
    let text = "On 01/05/23, A sent 10 GBP to B.";
    assert_eq!(first_line(text), text);
}

#[test]
fn test_first_line_of_leading_newline_is_empty() {
    // A response that opens with a newline trims to nothing; the processing
    // loop treats that empty summary as a failure.
    assert_eq!(first_line("\nOn 01/05/23, A sent 10 GBP to B."), "");
}
