//! Rule sets for the request bodies accepted by the API.

use std::sync::LazyLock;

use regex::Regex;

use crate::{
    model::{
        auth::{OtpRequestDto, OtpVerificationDto},
        horse::{CreateHorseDto, UpdateHorseDto},
        ticket::{CreateTicketDto, TicketMessageDto},
    },
    server::validation::{FieldRules, Rule, Validate},
};

/// Maximum length of a ticket subject, in characters.
pub const TICKET_SUBJECT_MAX_CHARS: usize = 120;

/// Iranian mobile numbers: `09` followed by nine ASCII digits.
static PHONE_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^09[0-9]{9}$").expect("phone number pattern is valid"));

/// Exactly six ASCII digits.
static OTP_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{6}$").expect("otp code pattern is valid"));

fn phone_number_rules() -> FieldRules {
    FieldRules::required("phoneNumber")
        .rule(Rule::string("Phone number must be a string"))
        .rule(Rule::not_empty("Phone number is required"))
        .rule(Rule::pattern(
            &PHONE_NUMBER_PATTERN,
            "Phone number must start with 09 and contain exactly 11 digits",
        ))
}

fn otp_code_rules() -> FieldRules {
    FieldRules::required("otpCode")
        .rule(Rule::string("Verification code must be a string"))
        .rule(Rule::not_empty("Verification code is required"))
        .rule(Rule::pattern(
            &OTP_CODE_PATTERN,
            "Verification code must be exactly 6 digits",
        ))
}

fn message_rules() -> [FieldRules; 2] {
    [
        FieldRules::optional("content").rule(Rule::string("Message content must be a string")),
        FieldRules::optional("image").rule(Rule::string("Image reference must be a string")),
    ]
}

fn page_url_rules() -> FieldRules {
    FieldRules::optional("url").rule(Rule::string("Page address must be a string"))
}

static OTP_REQUEST_RULES: LazyLock<Vec<FieldRules>> =
    LazyLock::new(|| vec![phone_number_rules()]);

static OTP_VERIFICATION_RULES: LazyLock<Vec<FieldRules>> =
    LazyLock::new(|| vec![phone_number_rules(), otp_code_rules()]);

static CREATE_TICKET_RULES: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    let mut rules = vec![FieldRules::required("subject")
        .rule(Rule::string("Subject must be a string"))
        .rule(Rule::not_empty("Subject is required"))
        .rule(Rule::max_chars(
            TICKET_SUBJECT_MAX_CHARS,
            "Subject must be at most 120 characters",
        ))];
    rules.extend(message_rules());
    rules
});

static TICKET_MESSAGE_RULES: LazyLock<Vec<FieldRules>> =
    LazyLock::new(|| message_rules().into_iter().collect());

static CREATE_HORSE_RULES: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        FieldRules::required("name")
            .rule(Rule::string("Name must be a string"))
            .rule(Rule::not_empty("Name is required")),
        page_url_rules(),
        FieldRules::optional("description").rule(Rule::string("Description must be a string")),
        FieldRules::required("price").rule(Rule::non_negative_integer(
            "Price must be a non-negative integer",
        )),
    ]
});

static UPDATE_HORSE_RULES: LazyLock<Vec<FieldRules>> = LazyLock::new(|| {
    vec![
        FieldRules::optional("name")
            .rule(Rule::string("Name must be a string"))
            .rule(Rule::not_empty("Name must not be empty")),
        page_url_rules(),
        FieldRules::optional("description").rule(Rule::string("Description must be a string")),
        FieldRules::optional("price").rule(Rule::non_negative_integer(
            "Price must be a non-negative integer",
        )),
    ]
});

impl Validate for OtpRequestDto {
    fn rules() -> &'static [FieldRules] {
        &OTP_REQUEST_RULES
    }
}

impl Validate for OtpVerificationDto {
    fn rules() -> &'static [FieldRules] {
        &OTP_VERIFICATION_RULES
    }
}

impl Validate for CreateTicketDto {
    fn rules() -> &'static [FieldRules] {
        &CREATE_TICKET_RULES
    }
}

impl Validate for TicketMessageDto {
    fn rules() -> &'static [FieldRules] {
        &TICKET_MESSAGE_RULES
    }
}

impl Validate for CreateHorseDto {
    fn rules() -> &'static [FieldRules] {
        &CREATE_HORSE_RULES
    }
}

impl Validate for UpdateHorseDto {
    fn rules() -> &'static [FieldRules] {
        &UPDATE_HORSE_RULES
    }
}
