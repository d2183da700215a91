//! HTML list rendering for feature-status records.
//!
//! Each record becomes one `<li>` fragment: title (with inline code spans),
//! then either an unresolved badge, or the stabilization link plus channel
//! badge, then RFC and tracking links. Fragments are inserted before the
//! current first child of the output list, so the page displays records in
//! reverse input order.

mod dom;
mod inline;

pub use dom::{Element, Node};
pub use inline::Span;

use crate::error::RenderError;
use crate::links;
use crate::models::{Channel, FeatureRecord, RfcRef, RustcVersion, Stabilization};

/// Render `records` into `list`, newest-defined first.
///
/// `stable` is the current stable release the channel badges classify
/// against.
pub fn fill_list(
    records: &[FeatureRecord],
    stable: RustcVersion,
    list: &mut Element,
) -> Result<(), RenderError> {
    for record in records {
        let item = render_record(record, stable)?;
        list.insert_first(item);
        tracing::debug!(title = %record.title, "rendered record");
    }
    Ok(())
}

fn render_record(record: &FeatureRecord, stable: RustcVersion) -> Result<Element, RenderError> {
    let mut item = Element::new("li");
    for span in inline::parse(&record.title) {
        match span {
            Span::Text(text) => item.append_text(text),
            Span::Code(code) => item.append(Element::new("code").text(code)),
        }
    }
    item.append_text(" ");

    // An open design question supersedes all status fragments.
    if let Some(unresolved) = &record.unresolved {
        let rfc = parse_rfc(unresolved, record)?;
        let mut badge = rfc_link(&rfc, Some("unresolved"));
        badge.add_class("unresolved");
        item.append(badge);
        return Ok(item);
    }

    match &record.stabilized {
        None => item.append(
            Element::new("span")
                .class("not-stabilized")
                .text("not stabilized yet"),
        ),
        Some(stabilized) => {
            item.append(stabilization_link(stabilized));
            item.append_text(" ");
            item.append(channel_badge(record, stabilized, stable)?);
        }
    }

    if record.rfc.is_some() || record.tracking.is_some() {
        item.append_text(" / ");
    }
    if let Some(reference) = &record.rfc {
        let rfc = parse_rfc(reference, record)?;
        item.append(rfc_link(&rfc, None));
        if record.tracking.is_some() {
            item.append_text(" / ");
        }
    }
    if let Some(tracking) = record.tracking {
        let text = match &record.repo {
            Some(repo) => format!("{repo} #{tracking}"),
            None => format!("#{tracking}"),
        };
        item.append(
            Element::new("a")
                .class("tracking")
                .attr("href", links::issue_url(record.repo.as_deref(), tracking))
                .attr("title", "Tracking issue")
                .text(text),
        );
    }
    Ok(item)
}

fn stabilization_link(stabilized: &Stabilization) -> Element {
    Element::new("a")
        .class("stabilized")
        .attr("href", links::pr_url(stabilized.pr))
        .text(format!("stabilized in {}", stabilized.version))
}

fn channel_badge(
    record: &FeatureRecord,
    stabilized: &Stabilization,
    stable: RustcVersion,
) -> Result<Element, RenderError> {
    let version: RustcVersion =
        stabilized
            .version
            .parse()
            .map_err(|source| RenderError::BadVersion {
                title: record.title.clone(),
                source,
            })?;
    let channel = Channel::classify(version, stable);
    Ok(Element::new("span")
        .class(channel.as_str())
        .text(format!("[in {channel}]")))
}

fn rfc_link(rfc: &RfcRef, text: Option<&str>) -> Element {
    let mut link = Element::new("a").class("rfc").attr("href", rfc.url.clone());
    if rfc.merged {
        link.add_class("merged");
    }
    link.text(match text {
        Some(text) => text.to_string(),
        None => rfc.display_text(),
    })
}

fn parse_rfc(reference: &str, record: &FeatureRecord) -> Result<RfcRef, RenderError> {
    RfcRef::parse(reference).map_err(|source| RenderError::BadRfc {
        title: record.title.clone(),
        source,
    })
}
