//! Form generation: unambiguous alternate spellings of an identifier
//!
//! A form must resolve back to exactly one canonical identifier:
//! `GPL-3.0-or-later` is also written `gpl-3.0+`, `gpl-3+` and `gpl3+`.

use super::globs::dedup_in_place;

const OR_LATER: &str = "-or-later";

/// All lower-case spellings that should canonicalize to `canonical`.
///
/// The first element is always the lower-cased identifier itself. Recursion
/// only ever sees a strictly shorter string.
pub fn canonical_to_forms(canonical: &str) -> Vec<String> {
    let canonical = canonical.to_lowercase();
    let mut forms = vec![canonical.clone()];

    if canonical.contains("-or-later-") {
        forms.push(canonical.replace("-or-later-", "+"));
    } else if let Some(base) = canonical.strip_suffix(OR_LATER) {
        forms.extend(canonical_to_forms(base).into_iter().map(|form| form + "+"));
    }

    if let Some(base) = canonical.strip_suffix(".0") {
        forms.extend(canonical_to_forms(base));
    }

    // `...-3` → `...3`; any other trailing digit is doubled (`...3.0` → `...3.00`)
    for digit in '0'..='9' {
        if canonical.ends_with(digit) {
            let suffix = format!("-{}", digit);
            let base = canonical.strip_suffix(suffix.as_str()).unwrap_or(canonical.as_str());
            forms.push(format!("{}{}", base, digit));
        }
    }

    // `...-1.5` → `...1.5`
    for tenths in (15..100).step_by(10) {
        let version = format!("{}.{}", tenths / 10, tenths % 10);
        if canonical.ends_with(version.as_str()) {
            let suffix = format!("-{}", version);
            let base = canonical.strip_suffix(suffix.as_str()).unwrap_or(canonical.as_str());
            forms.push(format!("{}{}", base, version));
        }
    }

    dedup_in_place(&mut forms);
    forms
}
