/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Static page content and timing configuration.
//!
//! Everything in this module is a process-lifetime constant: the code-sample
//! tabs and FAQ entries are baked in at compile time and are never rebuilt
//! per render.

use once_cell::sync::Lazy;

/// How long the "Copied" feedback on a copy button stays visible.
pub const COPY_FEEDBACK_MS: u32 = 1_500;

/// Simulated network delay for the waitlist signup. There is no backend;
/// the delay exists so the submit button exercises its loading state.
pub const WAITLIST_SUBMIT_DELAY_MS: u32 = 800;

/// A single entry in the code-sample tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeSample {
    pub key: &'static str,
    pub label: &'static str,
    pub install: &'static str,
    pub code: &'static str,
}

pub const CODE_SAMPLES: [CodeSample; 4] = [
    CodeSample {
        key: "node",
        label: "Node.js",
        install: "npm i @vanishauth/biometrics",
        code: r#"import express from 'express';
import { withBiometrics } from '@vanishauth/biometrics';

const app = express();

// Auth that disappears — one line to protect every route
app.use(withBiometrics());

app.get('/profile', (req, res) => {
  res.json({ user: req.user });
});

app.listen(3000);"#,
    },
    CodeSample {
        key: "react",
        label: "React",
        install: "npm i @vanishauth/react",
        code: r#"import { BiometricsProvider, useBiometrics } from '@vanishauth/react';

export default function App() {
  return (
    <BiometricsProvider projectId={import.meta.env.VITE_PROJECT_ID}>
      <Profile />
    </BiometricsProvider>
  );
}

function Profile() {
  const { login, user, ready } = useBiometrics();
  if (!ready) return 'Loading…';
  return user ? (
    <div>Hello {user.name}</div>
  ) : (
    <button onClick={login}>Sign in with Face/Touch ID</button>
  );
}"#,
    },
    CodeSample {
        key: "next",
        label: "Next.js (Route Handler)",
        install: "npm i @vanishauth/edge",
        code: r#"import { withBiometrics } from '@vanishauth/edge';

export const GET = withBiometrics(async (req) => {
  const user = req.auth.user;
  return new Response(JSON.stringify({ user }), { status: 200 });
});"#,
    },
    CodeSample {
        key: "curl",
        label: "cURL test",
        install: "# no install needed",
        code: r#"# Exchange a WebAuthn assertion for a session token
curl -X POST https://api.vanishauth.com/v1/session \
  -H 'Content-Type: application/json' \
  -d '{"assertion":"<webauthn-assertion>","projectId":"prj_123"}'"#,
    },
];

/// Look up a code sample by its tab key, falling back to the first entry.
pub fn sample_by_key(key: &str) -> &'static CodeSample {
    CODE_SAMPLES
        .iter()
        .find(|sample| sample.key == key)
        .unwrap_or(&CODE_SAMPLES[0])
}

/// A question/answer pair in the FAQ accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ITEMS: [FaqItem; 4] = [
    FaqItem {
        question: "How is this different from magic links or OTPs?",
        answer: "Passkeys use public-key cryptography and on-device biometrics. There are no one-time codes to phish or links to intercept, and users authenticate in under two seconds.",
    },
    FaqItem {
        question: "Which platforms are supported?",
        answer: "All modern platforms with WebAuthn/Passkeys: iOS, Android, macOS, Windows, ChromeOS. Works in major browsers and native webviews.",
    },
    FaqItem {
        question: "Can we migrate off later?",
        answer: "Yes. We build on open standards. You can export registered public keys and user metadata to self-host or another provider.",
    },
    FaqItem {
        question: "What about compliance?",
        answer: "We align with SOC 2, GDPR, and CCPA requirements. Data is encrypted at rest and in transit, with regional data residency options.",
    },
];

// -----------------------------------------------------------------------------
// Validation helpers
// -----------------------------------------------------------------------------

static EMAIL_RE: Lazy<regex::Regex> =
    Lazy::new(|| regex::Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns `true` iff the supplied address looks like `local@domain.tld`.
///
/// Deliberately loose: this only keeps obvious typos out of the waitlist,
/// it does not attempt RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("dev+waitlist@vanishauth.io"));
        assert!(is_valid_email("a@b.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("two words@example.com"));
        assert!(!is_valid_email("user@exa mple.com"));
    }

    #[test]
    fn sample_lookup_falls_back_to_first_entry() {
        assert_eq!(sample_by_key("react").key, "react");
        assert_eq!(sample_by_key("curl").key, "curl");
        assert_eq!(sample_by_key("cobol").key, CODE_SAMPLES[0].key);
    }

    #[test]
    fn tab_keys_are_unique() {
        for (i, a) in CODE_SAMPLES.iter().enumerate() {
            for b in &CODE_SAMPLES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn every_sample_has_an_install_line_and_code() {
        for sample in &CODE_SAMPLES {
            assert!(!sample.install.is_empty());
            assert!(!sample.code.is_empty());
        }
    }
}
