/// Few-shot prompt for turning a SWIFT MT103 message into a one-line summary.
///
/// The three worked examples pin the output format so the model answers with
/// a single sentence instead of a free-form explanation.
pub const SUMMARY_PROMPT: &str = concat!(
    "The following is a SWIFT MT103 message. Summarize it telling me the name of the sending account holder,",
    " receiving account holder, money sent, transaction date and currency. Do not provide additional information. ",
    "\n\nInput: {1:F01BANKBEBBAXXX1234567890}{2:O1031130050901BANKBEBBAXXX12345678900509011311N}{3:{108:MT103}}{4:",
    "\n:20:REFERENCE12345\n:23B:CRED\n:32A:230501EUR123456,78\n:50A:/12345678901234567890MR. JOHN DOE\n:59:/23456789012345678901MS.",
    " JANE SMITH\n:70:INVOICE 987654\n:71A:SHA\n-}\nOutput: On 01/05/23, MR. JOHN DOE with account number 12345678901234567890 sent 123456.78 ",
    "EUR to MS. JANE SMITH with account number 23456789012345678901. The reference was REFERENCE12345.\n\nInput: {1:F01BANKNICKZCDD7594000006}",
    "{2:I103BANKROBEXECFN1020}{3:{113:SEPA}{108:YCBK8YG4Z5IJ7E2T}}{4\n:20:GEOTOROB6\n:23B:CRED\n:32A:240916GBP429,00\n:50A:/51487815622711023840 ",
    "George Lucas\n:59:/45557308524085670622 Rob Parker\n:70:INVOICE 000006\n:71A:SHA\n-}\nOutput: ON 16/09/24, George Lucas with account number ",
    "51487815622711023840 sent 429.00 GBP to Rob Parker with account number 45557308524085670622. The reference was GEOTOROB6.\n\nInput: ",
    "{1:F01BANKGRAHZBEB3739000008}{2:I103BANKNICKXCDDN1020}{3:{113:SEPA}{108:1B20UFNXCLS7CC7U}}{4\n:20:BILTOROB8\n:23B:CRED\n:32A:240712GBP152,00",
    "\n:50A:/82843786428070666022 Bill Gates\n:59:/22622140566055075773 Rob Parker\n:70:INVOICE 000008\n:71A:SHA\n-}\n{5:{CHK:a524492dc9399c33e4bebb6b457ccd56}}",
    "\nOutput: ON 12/07/24, Bill Gates with account number 82843786428070666022 sent 152.00 GBP to Rob Parker with account number 22622140566055075773. ",
    "The reference was BILTOROB8.\n\nInput: ",
);

/// Wraps a raw MT103 message in the few-shot prompt, ready to be sent as the
/// `input` field of a watsonx.ai text-generation request. Newlines inside the
/// message are escaped by JSON serialization, not here.
pub fn build_input(message: &str) -> String {
    format!("{SUMMARY_PROMPT}{message}\nOutput:")
}

/// Trims generated text to its first line. Text with no newline is returned
/// unchanged.
pub fn first_line(text: &str) -> &str {
    match text.find('\n') {
        Some(index) => &text[..index],
        None => text,
    }
}
