mod event;
mod model;

use proc_macro::TokenStream;

// ============================================================================
// #[derive(Event)]
// ============================================================================

/// Derive macro that implements `sourced_uow::Event`.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Event)]
/// #[event(name = "order.placed")]
/// pub struct OrderPlaced {
///     pub order_id: String,
/// }
/// ```
///
/// - `#[event(name = "...")]` sets the routing key handlers are registered under.
///   If omitted, defaults to the type name (`"OrderPlaced"`).
#[proc_macro_derive(Event, attributes(event))]
pub fn derive_event(input: TokenStream) -> TokenStream {
    event::derive_event(input)
}

// ============================================================================
// #[derive(Model)]
// ============================================================================

/// Derive macro that implements `sourced_uow::Model`.
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Model)]
/// #[model(collection = "terms")]
/// pub struct Term {
///     #[model(id)]
///     pub id: String,
///     pub key: String,
/// }
/// ```
///
/// - `#[model(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
/// - `#[model(id)]` marks the field used as the unique identifier.
///   If omitted, defaults to a field named `id`.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input)
}
