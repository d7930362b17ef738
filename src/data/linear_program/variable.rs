//! # Tableau variables
//!
//! Every column of the tableau (except the right-hand side) corresponds to exactly one variable.
use std::fmt::{self, Display};
use std::ops::Index;

use enum_map::{Enum, EnumMap};

/// The role a variable plays in the augmented problem.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum VariableKind {
    /// A variable of the original problem.
    Decision,
    /// Added with coefficient `+1` to a `<=` row.
    Slack,
    /// Added with coefficient `-1` to a `>=` row.
    Surplus,
    /// Added with coefficient `+1` to a `>=` or `=` row, to get a starting basis.
    Artificial,
}

impl VariableKind {
    /// Name prefix for variables of this kind.
    pub fn prefix(self) -> char {
        match self {
            VariableKind::Decision => 'x',
            VariableKind::Slack => 's',
            VariableKind::Surplus => 'e',
            VariableKind::Artificial => 'a',
        }
    }
}

/// A named tableau column.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Variable {
    /// Name as shown to the user, e.g. `x1` or `a2`.
    pub name: String,
    #[allow(missing_docs)]
    pub kind: VariableKind,
    /// Index of the tableau column.
    pub column: usize,
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Ordered collection of all tableau variables.
///
/// Columns are contiguous and start at zero: the variable at position `j` has column `j`. Names
/// are numbered per kind, starting at 1, in order of addition.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct VariableRegistry {
    variables: Vec<Variable>,
    counts: EnumMap<VariableKind, usize>,
}

impl VariableRegistry {
    /// Create a registry holding the decision variables `x1` through `xn` at columns `0..n`.
    pub fn new(nr_decision_variables: usize) -> Self {
        let mut registry = Self {
            variables: Vec::with_capacity(nr_decision_variables),
            counts: EnumMap::default(),
        };
        for _ in 0..nr_decision_variables {
            registry.push(VariableKind::Decision);
        }

        registry
    }

    /// Append a variable in the next free column.
    ///
    /// # Return value
    ///
    /// The column index of the new variable.
    pub fn push(&mut self, kind: VariableKind) -> usize {
        debug_assert!(
            kind != VariableKind::Decision || self.variables.len() == self.counts[kind],
            "decision variables come first",
        );

        let column = self.variables.len();
        self.counts[kind] += 1;
        self.variables.push(Variable {
            name: format!("{}{}", kind.prefix(), self.counts[kind]),
            kind,
            column,
        });

        column
    }

    /// Total number of variables, `n_total`.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether there are no variables at all.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of variables of a given kind.
    pub fn count(&self, kind: VariableKind) -> usize {
        self.counts[kind]
    }

    /// Variable at a column, if it exists.
    pub fn get(&self, column: usize) -> Option<&Variable> {
        self.variables.get(column)
    }

    /// Name of the variable at a column.
    ///
    /// # Panics
    ///
    /// If the column is out of range.
    pub fn name(&self, column: usize) -> &str {
        &self.variables[column].name
    }

    /// Column of the variable with this name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|variable| variable.name == name)
    }

    /// All names, in column order.
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|variable| variable.name.as_str()).collect()
    }

    /// All variables, in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Variable> {
        self.variables.iter()
    }

    /// Columns of all variables of a kind, in increasing order.
    pub fn columns_of(&self, kind: VariableKind) -> impl Iterator<Item = usize> + '_ {
        self.variables.iter()
            .filter(move |variable| variable.kind == kind)
            .map(|variable| variable.column)
    }
}

impl Index<usize> for VariableRegistry {
    type Output = Variable;

    fn index(&self, column: usize) -> &Self::Output {
        &self.variables[column]
    }
}
