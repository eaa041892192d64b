//! Rule compilation
//!
//! Compilation semantics:
//! - An empty rule list is rejected
//! - Every rule must name a field
//! - Every non-empty pattern must compile
//! - A field listed twice is defined by its last occurrence

use std::collections::hash_map;
use std::collections::HashMap;
use std::slice;

use regex::Regex;

use super::errors::{RuleError, RuleResult};
use super::types::{EvaluationOrder, ValidationRule};

/// A rule paired with its pre-built pattern matcher.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: ValidationRule,
    matcher: Option<Regex>,
}

impl CompiledRule {
    /// Compiles one rule. `index` is the rule's position in configuration,
    /// used only for error reporting.
    fn compile(index: usize, rule: ValidationRule) -> RuleResult<Self> {
        if rule.field.is_empty() {
            return Err(RuleError::EmptyField { index });
        }

        let matcher = match rule.pattern_source() {
            Some(source) => Some(Regex::new(source).map_err(|source| {
                RuleError::InvalidPattern {
                    field: rule.field.clone(),
                    source,
                }
            })?),
            None => None,
        };

        Ok(Self { rule, matcher })
    }

    /// The declarative rule this was compiled from
    pub fn rule(&self) -> &ValidationRule {
        &self.rule
    }

    pub fn field(&self) -> &str {
        &self.rule.field
    }

    /// The compiled pattern, if the rule has one
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }
}

/// Indexed, immutable set of compiled rules keyed by field name.
///
/// Built once and then only read, so a single instance can be shared by
/// reference across any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
    index: HashMap<String, usize>,
    order: EvaluationOrder,
}

impl RuleSet {
    /// Compiles `rules` into a rule set evaluated in `order`.
    ///
    /// # Errors
    ///
    /// Returns `RuleError` if:
    /// - `rules` is empty
    /// - a rule has an empty field name
    /// - a pattern is not a valid regular expression
    pub fn compile(rules: &[ValidationRule], order: EvaluationOrder) -> RuleResult<Self> {
        if rules.is_empty() {
            return Err(RuleError::EmptyRules);
        }

        let mut set = Self {
            rules: Vec::with_capacity(rules.len()),
            index: HashMap::with_capacity(rules.len()),
            order,
        };

        for (position, rule) in rules.iter().enumerate() {
            let compiled = CompiledRule::compile(position, rule.clone())?;

            // Later definitions overwrite earlier ones.
            match set.index.get(&rule.field) {
                Some(&slot) => set.rules[slot] = compiled,
                None => {
                    set.index.insert(rule.field.clone(), set.rules.len());
                    set.rules.push(compiled);
                }
            }
        }

        Ok(set)
    }

    /// Number of distinct fields with a rule
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always false for a successfully compiled set
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Looks up the rule for `field`
    pub fn get(&self, field: &str) -> Option<&CompiledRule> {
        self.index.get(field).map(|&slot| &self.rules[slot])
    }

    pub fn order(&self) -> EvaluationOrder {
        self.order
    }

    /// Iterates rules in this set's evaluation order.
    pub fn iter(&self) -> RuleSetIter<'_> {
        let inner = match self.order {
            EvaluationOrder::Configured => IterInner::Configured(self.rules.iter()),
            EvaluationOrder::Unordered => IterInner::Unordered {
                slots: self.index.values(),
                rules: &self.rules,
            },
        };
        RuleSetIter { inner }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a CompiledRule;
    type IntoIter = RuleSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the rules of a [`RuleSet`] in evaluation order
pub struct RuleSetIter<'a> {
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Configured(slice::Iter<'a, CompiledRule>),
    Unordered {
        slots: hash_map::Values<'a, String, usize>,
        rules: &'a [CompiledRule],
    },
}

impl<'a> Iterator for RuleSetIter<'a> {
    type Item = &'a CompiledRule;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Configured(iter) => iter.next(),
            IterInner::Unordered { slots, rules } => {
                let rules: &'a [CompiledRule] = *rules;
                slots.next().and_then(|&slot| rules.get(slot))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Configured(iter) => iter.size_hint(),
            IterInner::Unordered { slots, .. } => slots.size_hint(),
        }
    }
}

/// Compiles `rules` in configuration order.
pub fn compile(rules: &[ValidationRule]) -> RuleResult<RuleSet> {
    RuleSet::compile(rules, EvaluationOrder::default())
}
