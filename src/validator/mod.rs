//! Multi-level validator: walks a [`Document`] and emits semantic and
//! domain-rule diagnostics by cross-referencing the immutable
//! [`crate::specdb`] (spec.md §4.4). Read-only — the AST is never mutated.

mod link16;
mod link22;
mod semantic;

use crate::ast::Document;
use crate::diagnostic::Diagnostic;

/// Run the full rule catalog over every network in `document`, in the
/// fixed catalog order from §4.4: semantic rules first, then the
/// link-specific rule set matching each network's declared `link` type.
/// Diagnostics are the concatenation of each rule's output in that order.
pub fn validate(document: &Document) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for network in &document.networks {
        semantic::valid_link_type(network, &mut diagnostics);
        semantic::valid_classification(network, &mut diagnostics);
        semantic::track_number_uniqueness(network, &mut diagnostics);
        semantic::net_number_uniqueness(network, &mut diagnostics);

        match semantic::link_type(network) {
            Some("Link16") => {
                link16::ncs_required(network, &mut diagnostics);
                link16::valid_role(network, &mut diagnostics);
                link16::valid_platform_type(network, &mut diagnostics);
                link16::valid_track_number(network, &mut diagnostics);
                link16::valid_net_number(network, &mut diagnostics);
                link16::valid_tsdf(network, &mut diagnostics);
                link16::total_tsdf_budget(network, &mut diagnostics);
                link16::stacking_consistency(network, &mut diagnostics);
                link16::npg_subscriber_coverage(network, &mut diagnostics);
                link16::ppli_required(network, &mut diagnostics);
                link16::valid_npg_reference(network, &mut diagnostics);
                link16::valid_j_message_reference(network, &mut diagnostics);
                link16::message_npg_match(network, &mut diagnostics);
                link16::participant_reference(network, &mut diagnostics);
                link16::required_property(network, &mut diagnostics);
            }
            Some("Link22") => {
                link22::valid_role(network, &mut diagnostics);
                link22::valid_operating_mode(network, &mut diagnostics);
                link22::valid_data_rate(network, &mut diagnostics);
                link22::valid_unit_id(network, &mut diagnostics);
                link22::valid_forwarding(network, &mut diagnostics);
                link22::link22_controller_required(network, &mut diagnostics);
                link22::link22_forwarding(network, &mut diagnostics);
                link22::unit_id_uniqueness(network, &mut diagnostics);
                link22::required_property(network, &mut diagnostics);
            }
            // §4.4: "If absent [or unrecognized], skip link-specific rules
            // silently" — `valid-link-type` has already flagged a bad value.
            _ => {}
        }
    }

    log::debug!(
        "validated {} network(s), {} diagnostic(s)",
        document.networks.len(),
        diagnostics.len()
    );

    diagnostics
}
