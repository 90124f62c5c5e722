use proc_macro::TokenStream;

mod mapper;

/// Register a function as the mapper for its `(destination, source)` pair.
///
/// The source type is the first parameter, the destination type the return
/// type. An optional second parameter receives the extra arguments as
/// `&convey::Args`. With `#[mapper(fallible)]` the function returns
/// `Result<Destination, E>` and the error reaches the caller of `convert`.
///
/// The function stays callable as written. Registries pick the mapper up with
/// `MapperRegistry::register_collected`, and `convey::global()` does so on
/// first access.
///
/// # Usage
///
/// ```rust,ignore
/// #[convey::mapper]
/// fn person_to_dto(entity: PersonEntity) -> PersonDto {
///     PersonDto { name: entity.full_name }
/// }
///
/// #[convey::mapper]
/// fn price_to_label(price: Price, args: &convey::Args) -> Label {
///     let currency = args.get::<&str>(0).copied().unwrap_or("EUR");
///     Label(format!("{} {currency}", price.0))
/// }
///
/// #[convey::mapper(fallible)]
/// fn parse_port(raw: RawPort) -> Result<Port, std::num::ParseIntError> {
///     raw.0.parse().map(Port)
/// }
/// ```
#[proc_macro_attribute]
pub fn mapper(attr: TokenStream, item: TokenStream) -> TokenStream {
    mapper::mapper_impl(attr, item)
}
