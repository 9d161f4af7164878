//! Canned replies for social phrases, checked before any corpus scoring so a
//! bare "hello" never lands on an FAQ that happens to share a common word.

use faqbot_core::types::SmallTalkKind;
use faqbot_text::normalize;

const GREETINGS: &[&str] = &[
    "hi", "hello", "hey", "hi there", "hello there",
    "good morning", "good afternoon", "good evening",
];
const FAREWELLS: &[&str] = &["bye", "goodbye", "bye bye", "see you", "see you later"];
const THANKS: &[&str] = &["thanks", "thank you", "thanks a lot", "thank you so much", "thx"];
const HOW_ARE_YOU: &[&str] = &["how are you", "how are you doing", "how is it going", "how s it going"];

/// Exact match of the normalized text against the phrase sets.
pub fn classify(text: &str) -> Option<SmallTalkKind> {
    let normalized = normalize(text);
    let phrase = normalized.as_str();
    [
        (GREETINGS, SmallTalkKind::Greeting),
        (FAREWELLS, SmallTalkKind::Farewell),
        (THANKS, SmallTalkKind::Thanks),
        (HOW_ARE_YOU, SmallTalkKind::HowAreYou),
    ]
    .into_iter()
    .find_map(|(phrases, kind)| phrases.contains(&phrase).then_some(kind))
}

pub fn response(kind: SmallTalkKind) -> &'static str {
    match kind {
        SmallTalkKind::Greeting => "Hello! How can I help you today?",
        SmallTalkKind::Farewell => "Goodbye! Feel free to come back if you have more questions.",
        SmallTalkKind::Thanks => "You're welcome! Anything else I can help with?",
        SmallTalkKind::HowAreYou => "I'm doing well, thanks for asking! What can I help you with?",
    }
}
