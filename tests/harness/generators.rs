// SPDX-FileCopyrightText: 2025 Hyperpolymath
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Test data generators for abuse simulation.

use contact_guard::ContactFields;

/// A form that passes every rule.
pub fn valid_fields(i: usize) -> ContactFields {
    ContactFields {
        name: format!("Cliente {i}"),
        email: format!("cliente{i}@example.com.br"),
        phone: Some("(11) 99999-9999".to_string()),
        subject: "Interesse no Cofrin".to_string(),
        message: format!("Mensagem de teste número {i} para o chatbot."),
    }
}

/// Markup injection payloads.
pub fn xss_payloads() -> Vec<&'static str> {
    vec![
        "<script>alert(1)</script>",
        "<SCRIPT SRC=//evil.example/x.js></SCRIPT>",
        "<img src=x onerror=alert(1)>",
        "<svg/onload=alert(1)>",
        r#"<a href="javascript:alert(1)">click</a>"#,
        r#"<a title="x>y" href='javascript:alert(1)'>click</a>"#,
        "<iframe src=\"https://evil.example\"></iframe>",
        "<<script>script>alert(1)<</script>/script>",
        "<scr<script>ipt>alert(1)</script>",
        "<!--<script>alert(1)</script>-->",
        "<style>body{background:url(javascript:alert(1))}</style>",
        "<textarea><script>alert(1)</script></textarea>",
        "<body onload=alert(1)>",
        "<<b>i>nested",
        "\"><script>alert(document.cookie)</script>",
        "<div style=\"width: expression(alert(1))\">x</div>",
        "<math><mi xlink:href=\"javascript:alert(1)\">x</mi></math>",
        "<unclosed attr=\"never ends",
    ]
}

/// Inputs that only look like markup.
pub fn benign_angle_brackets() -> Vec<&'static str> {
    vec!["1 < 2", "a > b", "<3", "<= 10", "-> seta", "x << y", "< >"]
}

/// Phone numbers in the shapes the validator accepts.
pub fn valid_phones() -> Vec<&'static str> {
    vec![
        "5511999999999",
        "+55 (11) 99999-9999",
        "551133334444",
        "+55 11 3333-4444",
        "11999999999",
        "(11) 99999-9999",
        "1133334444",
        "(11) 3333-4444",
    ]
}

/// Phone numbers outside the accepted shapes.
pub fn invalid_phones() -> Vec<&'static str> {
    vec![
        "",
        "123",
        "999999999",
        "4411999999999",
        "5511899999999",
        "441133334444",
        "11899999999",
        "55119999999999",
        "+1 (555) 123-4567",
        "abc-defg-hijk",
    ]
}

/// Email addresses over the length cap or with broken structure.
pub fn invalid_emails() -> Vec<String> {
    vec![
        String::new(),
        "not-an-email".to_string(),
        "@example.com".to_string(),
        "user@".to_string(),
        "user@@example.com".to_string(),
        "user@exa mple.com".to_string(),
        "user@-example.com".to_string(),
        "user@example-.com".to_string(),
        "user@.example.com".to_string(),
        "<user>@example.com".to_string(),
        format!("{}@x.com", "a".repeat(255)),
        format!("u@{}.com", "d".repeat(64)),
    ]
}

