use crate::error::ParseRfcError;

/// A parsed RFC reference.
///
/// A reference without a `-` separator denotes an unmerged proposal and
/// resolves to its pull request. With a separator, the part before an
/// optional `#` fragment is the merged proposal's page slug, and the digits
/// before the first `-` are its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RfcRef {
    pub id: u32,
    pub url: String,
    pub merged: bool,
}

const RFC_PULL_BASE: &str = "https://github.com/rust-lang/rfcs/pull";
const RFC_PAGE_BASE: &str = "https://rust-lang.github.io/rfcs";

impl RfcRef {
    pub fn parse(reference: &str) -> Result<RfcRef, ParseRfcError> {
        if reference.is_empty() {
            return Err(ParseRfcError::Empty);
        }
        let non_numeric = || ParseRfcError::NonNumericId(reference.to_string());
        match reference.find('-') {
            None => {
                let id = reference.parse().map_err(|_| non_numeric())?;
                Ok(RfcRef {
                    id,
                    url: format!("{RFC_PULL_BASE}/{reference}"),
                    merged: false,
                })
            }
            Some(dash) => {
                let id = reference[..dash].parse().map_err(|_| non_numeric())?;
                let hash = reference.find('#').unwrap_or(reference.len());
                let (page, fragment) = reference.split_at(hash);
                Ok(RfcRef {
                    id,
                    url: format!("{RFC_PAGE_BASE}/{page}.html{fragment}"),
                    merged: true,
                })
            }
        }
    }

    /// Link text, e.g. `RFC 1522`.
    pub fn display_text(&self) -> String {
        format!("RFC {}", self.id)
    }
}
