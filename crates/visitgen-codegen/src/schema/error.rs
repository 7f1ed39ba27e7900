use std::fmt::Display;

use quote::ToTokens;

/// Accumulates diagnostics so a single run reports every problem at once.
#[derive(Debug)]
pub(crate) struct ErrorSet {
    errors: Vec<syn::Error>,
}

impl ErrorSet {
    pub(crate) fn new() -> Self {
        Self { errors: vec![] }
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        self.errors.push(err);
    }

    pub(crate) fn spanned<T: ToTokens, U: Display>(&mut self, tokens: T, message: U) {
        self.push(syn::Error::new_spanned(tokens, message));
    }

    pub(crate) fn collect(self) -> Option<syn::Error> {
        self.errors.into_iter().reduce(|mut acc, err| {
            acc.combine(err);
            acc
        })
    }

    pub(crate) fn finish(self) -> syn::Result<()> {
        match self.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
