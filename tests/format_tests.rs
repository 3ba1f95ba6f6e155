use greetcard::format::{format_greeting, is_blank_generation, SIGNATURE};

#[test]
fn birthday_gets_bold_lead_breaks_and_signature() {
    let out = format_greeting("Happy Birthday! Have a wonderful day. Enjoy every moment. See you soon.");
    assert_eq!(
        out,
        "<b>Happy Birthday!</b><br><br> Have a wonderful day<br><br>Enjoy every moment<br><br>See you soon.<br><br><i>Best wishes from HR Dept. - T.A.C</i>"
    );
}

#[test]
fn no_bang_means_whole_text_bold_and_no_signature() {
    let out = format_greeting("Please provide more details");
    assert_eq!(out, "<b>Please provide more details</b><br><br>");
    assert!(!out.contains(SIGNATURE));
}

#[test]
fn bang_at_end_leaves_empty_remainder() {
    let out = format_greeting("Happy Anniversary!");
    assert_eq!(out, "<b>Happy Anniversary!</b><br><br>");
}

#[test]
fn whitespace_only_remainder_skips_signature() {
    let out = format_greeting("Congrats!   ");
    assert_eq!(out, "<b>Congrats!</b><br><br>   ");
}

#[test]
fn bold_markers_removed_before_split() {
    let out = format_greeting("**Happy Birthday, Rex!** Go chase a ball.");
    assert!(out.starts_with("<b>Happy Birthday, Rex!</b><br><br> Go chase a ball."));
    assert!(!out.contains("**"));
}

#[test]
fn abbreviations_break_too() {
    let out = format_greeting("Congrats! Dr. Smith says hi.");
    assert!(out.contains("Dr<br><br>Smith says hi."));
}

#[test]
fn lead_is_not_touched_by_sentence_breaks() {
    let out = format_greeting("Hi Mr. Lee. Happy day! More. Text");
    assert!(out.starts_with("<b>Hi Mr. Lee. Happy day!</b>"));
}

#[test]
fn html_is_not_escaped() {
    let out = format_greeting("<script>x</script>! a. b");
    assert!(out.starts_with("<b><script>x</script>!</b>"));
}

#[test]
fn formatting_is_deterministic() {
    let raw = "Happy Birthday! Have a wonderful day. Enjoy every moment.";
    assert_eq!(format_greeting(raw), format_greeting(raw));
}

#[test]
fn blank_detection() {
    assert!(is_blank_generation(""));
    assert!(is_blank_generation(" \t\n"));
    assert!(is_blank_generation("**  **"));
    assert!(!is_blank_generation("!"));
}
