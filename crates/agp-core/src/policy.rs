//! Policy Evaluator — decides whether a provider's policy profile satisfies
//! a caller's constraints.
//!
//! The evaluation rule for a constraint is chosen by the *kind* of the
//! constraint value:
//!
//! | kind    | semantics   | attribute absent from profile |
//! |---------|-------------|-------------------------------|
//! | number  | sufficiency (`declared >= required`) | treated as `0` |
//! | boolean | exact match | treated as `false` |
//! | text    | exact match | never satisfies |
//!
//! A profile satisfies a constraint set iff it satisfies every constraint in
//! it; the empty set is satisfied by every profile. Evaluation is pure and
//! total: a declared value of the wrong kind simply fails the constraint.

use agp_proto::{PolicyKind, PolicyMap, PolicyValue};

/// How a declared value is compared against a required one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Semantics {
    /// The declared number must be at least the required number.
    Sufficiency,
    /// The declared value must equal the required value, kind included.
    Exact,
}

/// Evaluation rule for one value kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub semantics: Semantics,
    /// Value assumed when the profile does not declare the attribute.
    /// `None` means an absent attribute never satisfies the constraint.
    pub absent_default: Option<PolicyValue>,
}

/// The rule table, keyed by constraint kind.
pub fn rule_for(kind: PolicyKind) -> Rule {
    match kind {
        PolicyKind::Number => Rule {
            semantics: Semantics::Sufficiency,
            absent_default: Some(PolicyValue::Number(0.0)),
        },
        PolicyKind::Boolean => Rule {
            semantics: Semantics::Exact,
            absent_default: Some(PolicyValue::Boolean(false)),
        },
        PolicyKind::Text => Rule {
            semantics: Semantics::Exact,
            absent_default: None,
        },
    }
}

impl Rule {
    /// Check one declared value (or its absence) against one requirement.
    pub fn check(&self, declared: Option<&PolicyValue>, required: &PolicyValue) -> bool {
        let Some(declared) = declared.or(self.absent_default.as_ref()) else {
            return false;
        };
        match self.semantics {
            Semantics::Sufficiency => match (declared.as_number(), required.as_number()) {
                (Some(have), Some(need)) => have >= need,
                _ => false,
            },
            Semantics::Exact => declared == required,
        }
    }
}

/// Stateless evaluator over policy profiles and constraint sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    /// Whether `policy` satisfies the single constraint `key = required`.
    pub fn satisfies_constraint(policy: &PolicyMap, key: &str, required: &PolicyValue) -> bool {
        rule_for(required.kind()).check(policy.get(key), required)
    }

    /// Whether `policy` satisfies every constraint in `constraints`.
    pub fn satisfies(policy: &PolicyMap, constraints: &PolicyMap) -> bool {
        constraints
            .iter()
            .all(|(key, required)| Self::satisfies_constraint(policy, key, required))
    }

    /// Constraint keys that `policy` fails, in sorted order.
    pub fn unmet(policy: &PolicyMap, constraints: &PolicyMap) -> Vec<String> {
        constraints
            .iter()
            .filter(|(key, required)| !Self::satisfies_constraint(policy, key, required))
            .map(|(key, _)| key.clone())
            .collect()
    }
}
