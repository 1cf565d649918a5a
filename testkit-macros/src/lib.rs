//! Procedural macros for testkit
//!
//! This crate provides the `#[testkit::test]` attribute macro, which hands
//! each test fresh mocks and fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use testkit::prelude::*;
//!
//! #[testkit::test]
//! fn records_lookup(mut spy: Spy) -> testkit::Result<()> {
//!     spy.returns("find").add_return("ada");
//!     assert_eq!(spy.call_with("find", "1"), "ada");
//!     spy.assert_called_times("find", 1)
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, FnArg, Ident, ItemFn, Lit, Pat, Token, Type,
};

/// Configuration options for the test macro.
#[derive(Default)]
struct TestConfig {
    /// Name given to an injected `TestContext` (default: the function name)
    context: Option<String>,
    /// Starting counter for an injected `TestData`
    data_start: Option<u64>,
}

impl Parse for TestConfig {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut config = TestConfig::default();

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "context" => {
                    let lit: Lit = input.parse()?;
                    if let Lit::Str(s) = lit {
                        config.context = Some(s.value());
                    } else {
                        return Err(syn::Error::new_spanned(lit, "expected a string literal"));
                    }
                }
                "data_start" => {
                    let lit: Lit = input.parse()?;
                    if let Lit::Int(i) = lit {
                        config.data_start = Some(i.base10_parse()?);
                    } else {
                        return Err(syn::Error::new_spanned(lit, "expected an integer literal"));
                    }
                }
                _ => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {ident}"),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(config)
    }
}

/// Fixtures the macro knows how to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fixture {
    Tracker,
    Spy,
    Context,
    Data,
}

impl Fixture {
    fn from_type(ty: &Type) -> Option<Self> {
        let Type::Path(type_path) = ty else {
            return None;
        };
        let segment = type_path.path.segments.last()?;
        match segment.ident.to_string().as_str() {
            "MockTracker" => Some(Self::Tracker),
            "Spy" => Some(Self::Spy),
            "TestContext" => Some(Self::Context),
            "TestData" => Some(Self::Data),
            _ => None,
        }
    }

    fn init(self, pat: &Pat, config: &TestConfig, fn_name: &Ident) -> TokenStream2 {
        match self {
            Self::Tracker => quote! {
                let #pat = ::testkit::mock::MockTracker::new();
            },
            Self::Spy => quote! {
                let #pat = ::testkit::mock::Spy::new();
            },
            Self::Context => {
                let name = config
                    .context
                    .clone()
                    .unwrap_or_else(|| fn_name.to_string());
                quote! {
                    let #pat = {
                        let mut context = ::testkit::fixtures::TestContext::new(#name);
                        context.setup();
                        context
                    };
                }
            }
            Self::Data => {
                let start = config.data_start.unwrap_or(0);
                quote! {
                    let #pat = ::testkit::fixtures::TestData::new().with_start(#start);
                }
            }
        }
    }
}

/// Test attribute macro that injects fresh fixtures.
///
/// Parameters typed `MockTracker`, `Spy`, `TestContext` or `TestData` are
/// removed from the signature and built at the start of the test, so no
/// recorded call or queued return leaks between tests.
///
/// # Basic Usage
///
/// ```rust,ignore
/// #[testkit::test]
/// fn test_basic(mut tracker: MockTracker) {
///     tracker.record("ping");
///     assert!(tracker.was_called("ping"));
/// }
/// ```
///
/// # Configuration Options
///
/// - `context = "name"` - Name of an injected `TestContext` (default: the function name).
///   The context is already set up.
/// - `data_start = 100` - Starting counter of an injected `TestData`
///
/// ```rust,ignore
/// #[testkit::test(context = "checkout", data_start = 100)]
/// fn test_options(ctx: TestContext, mut data: TestData) {
///     assert_eq!(ctx.name(), "checkout");
///     assert_eq!(data.next_id(), 101);
/// }
/// ```
#[proc_macro_attribute]
pub fn test(attr: TokenStream, item: TokenStream) -> TokenStream {
    let config = parse_macro_input!(attr as TestConfig);
    let input = parse_macro_input!(item as ItemFn);

    expand_test(&config, input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_test(config: &TestConfig, input: ItemFn) -> syn::Result<TokenStream2> {
    let name = &input.sig.ident;
    let body = &input.block;
    let attrs = &input.attrs;
    let vis = &input.vis;
    let output = &input.sig.output;

    if let Some(asyncness) = &input.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "testkit::test does not support async functions",
        ));
    }

    let mut inits = Vec::with_capacity(input.sig.inputs.len());
    for arg in &input.sig.inputs {
        let FnArg::Typed(pat_type) = arg else {
            return Err(syn::Error::new_spanned(arg, "unexpected receiver"));
        };
        let Some(fixture) = Fixture::from_type(&pat_type.ty) else {
            return Err(syn::Error::new_spanned(
                &pat_type.ty,
                "cannot inject this type; expected MockTracker, Spy, TestContext or TestData",
            ));
        };
        inits.push(fixture.init(&pat_type.pat, config, name));
    }

    Ok(quote! {
        #[::core::prelude::v1::test]
        #(#attrs)*
        #vis fn #name() #output {
            #(#inits)*
            #body
        }
    })
}

#[cfg(test)]
mod tests {
    use super::{expand_test, Fixture, TestConfig};

    #[::core::prelude::v1::test]
    fn test_config_parse_empty() {
        let config: TestConfig = syn::parse_str("").unwrap();
        assert!(config.context.is_none());
        assert!(config.data_start.is_none());
    }

    #[::core::prelude::v1::test]
    fn test_config_parse_multiple() {
        let config: TestConfig = syn::parse_str("context = \"login\", data_start = 100").unwrap();
        assert_eq!(config.context, Some("login".to_string()));
        assert_eq!(config.data_start, Some(100));
    }

    #[::core::prelude::v1::test]
    fn test_config_rejects_unknown_key() {
        assert!(syn::parse_str::<TestConfig>("runtime = \"tokio\"").is_err());
        assert!(syn::parse_str::<TestConfig>("data_start = \"ten\"").is_err());
    }

    #[::core::prelude::v1::test]
    fn test_fixture_from_type() {
        let ty: syn::Type = syn::parse_str("testkit::mock::Spy").unwrap();
        assert_eq!(Fixture::from_type(&ty), Some(Fixture::Spy));

        let ty: syn::Type = syn::parse_str("String").unwrap();
        assert_eq!(Fixture::from_type(&ty), None);
    }

    #[::core::prelude::v1::test]
    fn test_expand_rejects_async_and_unknown_params() {
        let config = TestConfig::default();

        let item: syn::ItemFn = syn::parse_str("async fn t() {}").unwrap();
        assert!(expand_test(&config, item).is_err());

        let item: syn::ItemFn = syn::parse_str("fn t(x: u32) {}").unwrap();
        assert!(expand_test(&config, item).is_err());
    }

    #[::core::prelude::v1::test]
    fn test_expand_strips_params() {
        let config = TestConfig::default();
        let item: syn::ItemFn =
            syn::parse_str("fn t(mut spy: Spy, ctx: TestContext) { spy.call(\"x\"); }").unwrap();

        let expanded = expand_test(&config, item).unwrap().to_string();
        assert!(expanded.contains("fn t ()"));
        assert!(expanded.contains("Spy :: new ()"));
        assert!(expanded.contains("TestContext :: new (\"t\")"));
    }
}
