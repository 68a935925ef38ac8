//! Candidate values handed to a rule by the policy host.
//!
//! A rule only needs two capabilities from its input: whether it is a URI,
//! and the URI text itself. [`UriValue`] captures exactly that, so parsed URLs,
//! graph nodes and test doubles can all be checked the same way.

/// A value that can report whether it is a URI and expose its URI text.
pub trait UriValue {
    /// True when the value is an IRI/URI node (not a literal or blank node).
    fn is_uri(&self) -> bool;

    /// The URI text. For non-URI values this is the lexical form and carries no meaning.
    fn uri(&self) -> &str;
}

impl<T: UriValue + ?Sized> UriValue for &T {
    fn is_uri(&self) -> bool {
        (**self).is_uri()
    }

    fn uri(&self) -> &str {
        (**self).uri()
    }
}

impl UriValue for url::Url {
    fn is_uri(&self) -> bool {
        true
    }

    fn uri(&self) -> &str {
        self.as_str()
    }
}

/// A graph term as a policy host sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// Named node (IRI).
    Iri(String),
    /// Literal value (lexical form only; datatype and language are not tracked).
    Literal(String),
    /// Blank node label, without the `_:` prefix.
    Blank(String),
}

impl Term {
    /// Classifies raw input text.
    ///
    /// `_:label` is a blank node, anything that parses as an absolute URL is an
    /// IRI (kept verbatim, not normalized), everything else is a literal.
    pub fn classify(raw: &str) -> Term {
        if let Some(label) = raw.strip_prefix("_:") {
            return Term::Blank(label.to_string());
        }
        match url::Url::parse(raw) {
            Ok(_) => Term::Iri(raw.to_string()),
            Err(_) => Term::Literal(raw.to_string()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Term::Iri(_) => "iri",
            Term::Literal(_) => "literal",
            Term::Blank(_) => "blank",
        }
    }
}

impl UriValue for Term {
    fn is_uri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    fn uri(&self) -> &str {
        match self {
            Term::Iri(s) | Term::Literal(s) | Term::Blank(s) => s,
        }
    }
}
