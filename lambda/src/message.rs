//! Message construction for the two notification channels: the
//! multi-line text summary published to SNS, and the spoken sentence
//! handed to the call flow.

use crate::core::models::FindingDetail;
use crate::errors::NotifierError;

/// Spell out an account id one digit at a time ("123" -> "one two three").
///
/// Connect's speech synthesis reads bare numeric strings
/// inconsistently, so the id is expanded before it reaches the call
/// flow. Only ASCII decimal digits are accepted; anything else
/// (including the "N/A" fallback for a missing account id) is an
/// error.
///
/// # Errors
///
/// Returns [`NotifierError::NonDigit`] on the first non-digit
/// character.
pub fn spell_digits(account_id: &str) -> Result<String, NotifierError> {
    let words = account_id
        .chars()
        .map(|c| match c {
            '0' => Ok("zero"),
            '1' => Ok("one"),
            '2' => Ok("two"),
            '3' => Ok("three"),
            '4' => Ok("four"),
            '5' => Ok("five"),
            '6' => Ok("six"),
            '7' => Ok("seven"),
            '8' => Ok("eight"),
            '9' => Ok("nine"),
            other => Err(NotifierError::NonDigit(other)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(words.join(" "))
}

/// The text summary sent to email subscribers, five labeled lines in
/// fixed order.
#[must_use]
pub fn format_summary(detail: &FindingDetail) -> String {
    format!(
        "GuardDuty Alert\n\n\
         Account ID: {}\n\
         Region: {}\n\
         Title: {}\n\
         Type: {}\n\
         Updated At: {}\n",
        detail.account_id(),
        detail.region(),
        detail.title(),
        detail.finding_type(),
        detail.updated_at(),
    )
}

/// The sentence read aloud on the call. Embeds only the spelled-out
/// account id, the region, and the finding title.
///
/// # Errors
///
/// Returns an error if the account id contains a non-digit character.
pub fn format_spoken_message(detail: &FindingDetail) -> Result<String, NotifierError> {
    let account_id_words = spell_digits(detail.account_id())?;

    Ok(format!(
        "Hello, this is AWS notifying you of a critical GuardDuty alert \
         impacting your AWS environment. In {} within the {} region, \
         we have detected {}. Please take action, thank you!",
        account_id_words,
        detail.region(),
        detail.title(),
    ))
}
