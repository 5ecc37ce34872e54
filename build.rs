fn main() {
    // Only run gRPC codegen when the "grpc" feature is enabled.
    // Cargo sets CARGO_FEATURE_GRPC when compiling with --features grpc.
    if std::env::var("CARGO_FEATURE_GRPC").is_ok() {
        let service = tonic_build::manual::Service::builder()
            .name("InventoryService")
            .package("inventory")
            .method(method("search_all_products", "SearchAllProducts", "Empty", "ProductList"))
            .method(method("search_product_by_id", "SearchProductById", "ProductId", "ProductReply"))
            .method(method("add_product", "AddProduct", "ProductRequest", "ProductReply"))
            .method(method("update_product", "UpdateProduct", "ProductRequest", "ProductReply"))
            .method(method("delete_product", "DeleteProduct", "ProductId", "Empty"))
            .method(method("ping", "Ping", "Empty", "PingReply"))
            .build();

        tonic_build::manual::Builder::new().compile(&[service]);
    }
}

fn method(
    name: &str,
    route_name: &str,
    input: &str,
    output: &str,
) -> tonic_build::manual::Method {
    tonic_build::manual::Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(format!("crate::rpc::{input}"))
        .output_type(format!("crate::rpc::{output}"))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}
