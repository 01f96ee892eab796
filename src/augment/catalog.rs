//! Relationship-type catalog: description templates and payload rules

use crate::config::AugmentConfig;
use crate::graph::{EdgePayload, RelationKind};
use rand::seq::SliceRandom;
use rand::Rng;

/// Shape of the `data` payload attached to a new edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
    None,
    /// `{amount, currency}`
    Debt,
    /// `{ownership_split: "<a>/<b>"}`
    JointVentureSplit,
    /// `{pct}`
    OwnershipPct,
}

/// Everything needed to instantiate edges of one relationship type
#[derive(Debug)]
pub struct RelationTemplate {
    pub kind: RelationKind,
    /// Sentences with `{source}` and `{target}` placeholders
    pub templates: &'static [&'static str],
    pub payload: PayloadRule,
}

impl RelationTemplate {
    /// Pick a template uniformly and fill in the two display names
    pub fn describe<R: Rng + ?Sized>(&self, rng: &mut R, source: &str, target: &str) -> String {
        match self.templates.choose(rng) {
            Some(template) => render_template(template, source, target),
            None => format!("{} {} {}", source, self.kind.as_tag(), target),
        }
    }

    pub fn payload<R: Rng + ?Sized>(&self, rng: &mut R, config: &AugmentConfig) -> Option<EdgePayload> {
        match self.payload {
            PayloadRule::None => None,
            PayloadRule::Debt => Some(EdgePayload::Debt {
                amount: config.debt_amount.sample(rng),
                currency: config.currency.clone(),
            }),
            PayloadRule::JointVentureSplit => {
                let ours = config.joint_venture_share.sample(rng);
                let theirs = config.joint_venture_share.sample(rng);
                Some(EdgePayload::JointVenture {
                    ownership_split: format!("{}/{}", ours, theirs),
                })
            }
            PayloadRule::OwnershipPct => Some(EdgePayload::Ownership {
                pct: config.ownership_pct.sample(rng),
            }),
        }
    }
}

/// Substitute `{source}` and `{target}` in a single pass
///
/// Names are inserted verbatim, so a name containing a placeholder is not
/// expanded again.
pub fn render_template(template: &str, source: &str, target: &str) -> String {
    let mut out = String::with_capacity(template.len() + source.len() + target.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{source}") {
            out.push_str(source);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{target}") {
            out.push_str(target);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Look up the catalog entry for a relationship type
pub fn template_for(kind: RelationKind) -> Option<&'static RelationTemplate> {
    CATALOG.iter().find(|entry| entry.kind == kind)
}

pub static CATALOG: [RelationTemplate; 9] = [
    RelationTemplate {
        kind: RelationKind::Client,
        templates: &[
            "{target} is a major client of {source}",
            "{source} provides services to {target}",
            "{target} purchases products from {source}",
            "{source} has {target} as a key customer",
            "{target} uses {source}'s platform/services",
        ],
        payload: PayloadRule::None,
    },
    RelationTemplate {
        kind: RelationKind::Supplier,
        templates: &[
            "{target} supplies components to {source}",
            "{source} sources materials from {target}",
            "{target} is a key supplier for {source}",
            "{source} relies on {target} for manufacturing",
            "{target} provides raw materials to {source}",
        ],
        payload: PayloadRule::None,
    },
    RelationTemplate {
        kind: RelationKind::Creditor,
        templates: &[
            "{source} has extended credit to {target}",
            "{target} has outstanding debt to {source}",
            "{source} is a creditor of {target}",
            "{target} owes money to {source}",
            "{source} provided financing to {target}",
        ],
        payload: PayloadRule::Debt,
    },
    RelationTemplate {
        kind: RelationKind::Debtor,
        templates: &[
            "{source} owes debt to {target}",
            "{target} is a creditor of {source}",
            "{source} has outstanding loans from {target}",
            "{target} extended credit to {source}",
            "{source} borrowed funds from {target}",
        ],
        payload: PayloadRule::Debt,
    },
    RelationTemplate {
        kind: RelationKind::JointVenture,
        templates: &[
            "{source} and {target} have a joint venture",
            "{source} and {target} formed a joint venture partnership",
            "Joint venture between {source} and {target}",
            "{source} and {target} collaborate through joint venture",
            "JV partnership: {source} and {target}",
        ],
        payload: PayloadRule::JointVentureSplit,
    },
    RelationTemplate {
        kind: RelationKind::Licensing,
        templates: &[
            "{source} licenses technology from {target}",
            "{target} has licensing agreement with {source}",
            "{source} uses {target}'s licensed technology",
            "Licensing agreement: {source} and {target}",
            "{target} provides licenses to {source}",
        ],
        payload: PayloadRule::None,
    },
    RelationTemplate {
        kind: RelationKind::Swaps,
        templates: &[
            "{source} and {target} have interest rate swap agreements",
            "Currency swap between {source} and {target}",
            "{source} and {target} engage in derivative swaps",
            "Swap agreement: {source} and {target}",
            "{source} has swap contracts with {target}",
        ],
        payload: PayloadRule::None,
    },
    RelationTemplate {
        kind: RelationKind::BoardInterlock,
        templates: &[
            "{source} and {target} share board members",
            "Board interlock between {source} and {target}",
            "{source} and {target} have overlapping board directors",
            "Shared board members: {source} and {target}",
            "Board member overlap: {source} and {target}",
        ],
        payload: PayloadRule::None,
    },
    RelationTemplate {
        kind: RelationKind::Ownership,
        templates: &[
            "{source} holds an equity stake in {target}",
            "{target} is partly owned by {source}",
            "{source} is a shareholder of {target}",
            "{source} owns shares of {target}",
        ],
        payload: PayloadRule::OwnershipPct,
    },
];
