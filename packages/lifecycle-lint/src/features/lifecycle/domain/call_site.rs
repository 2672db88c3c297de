/*
 * Call Sites
 *
 * A method invocation observed by the host, plus the syntactic identity used
 * to pair acquisitions with releases.
 */

use crate::shared::models::{NodeId, Span};
use serde::{Deserialize, Serialize};

/// An occurrence of a method invocation
///
/// Immutable once observed. The owning type is not stored here: it is
/// resolved lazily, after the name filter, and carried on the classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    /// Invoked method's simple name (e.g. "registerReceiver")
    pub method_name: String,

    /// Receiver expression node (`None` for implicit `this`)
    pub receiver: Option<NodeId>,

    /// Source text of each argument expression, in order
    pub arguments: Vec<String>,

    /// Location of the invocation
    pub span: Span,

    /// The invocation node itself
    pub node: NodeId,
}

impl CallSite {
    pub fn new(method_name: impl Into<String>, node: NodeId, span: Span) -> Self {
        Self {
            method_name: method_name.into(),
            receiver: None,
            arguments: Vec::new(),
            span,
            node,
        }
    }

    pub fn with_receiver(mut self, receiver: NodeId) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub fn with_arguments<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments = arguments.into_iter().map(Into::into).collect();
        self
    }

    /// Binding key of this call (its first argument), if any
    pub fn binding_key(&self) -> Option<BindingKey> {
        self.arguments.first().map(|arg| BindingKey::new(arg.as_str()))
    }
}

/// Textual identity of the resource an acquire/release call refers to
///
/// Two calls with equal keys are assumed, not proven, to refer to the same
/// resource instance. Same spelling in different scopes is the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BindingKey(String);

impl BindingKey {
    /// Whitespace inside the expression is dropped so `a . b` and `a.b` agree.
    pub fn new(expression: &str) -> Self {
        Self(expression.chars().filter(|c| !c.is_whitespace()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BindingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
