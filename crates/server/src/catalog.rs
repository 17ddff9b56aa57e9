//! Upstream catalog retrieval.
//!
//! The relevance core is agnostic to where candidates come from; handlers
//! depend on [`CatalogSource`] so tests can inject a fixture source while
//! production talks to the Shopify Admin GraphQL API.

use async_trait::async_trait;
use relevance::{CatalogEntry, Variant};
use serde_json::Value;

use crate::error::{ServerError, ServerResult};

/// Async supplier of candidate catalog entries.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Active, published products whose vendor field equals `vendor`.
    async fn products_by_vendor(&self, vendor: &str) -> ServerResult<Vec<CatalogEntry>>;

    /// A general slice of active, published products.
    async fn all_products(&self) -> ServerResult<Vec<CatalogEntry>>;
}

/// Shopify Admin GraphQL client.
pub struct ShopifyCatalog {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl ShopifyCatalog {
    pub fn new(shop_domain: &str, token: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("https://{shop_domain}/admin/api/2025-07/graphql.json"),
            token: token.to_string(),
        }
    }

    async fn run_query(&self, graphql: &str) -> ServerResult<Vec<CatalogEntry>> {
        let response = self
            .http
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", &self.token)
            .json(&serde_json::json!({ "query": graphql }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServerError::Upstream(format!(
                "catalog responded with status {status}"
            )));
        }

        let body: Value = response.json().await?;
        Ok(parse_products(&body))
    }
}

#[async_trait]
impl CatalogSource for ShopifyCatalog {
    async fn products_by_vendor(&self, vendor: &str) -> ServerResult<Vec<CatalogEntry>> {
        // Multi-word vendors need quoting inside the search clause.
        let vendor_clause = if vendor.contains(' ') {
            format!("vendor:\\\"{vendor}\\\"")
        } else {
            format!("vendor:{vendor}")
        };
        let graphql = format!(
            r#"{{
  products(first: 100, query: "status:active published_status:published {vendor_clause}") {{
    edges {{
      node {{
        id title handle vendor productType status totalInventory
        featuredImage {{ url }}
        variants(first: 10) {{ edges {{ node {{ id price availableForSale inventoryQuantity }} }} }}
      }}
    }}
  }}
}}"#
        );
        self.run_query(&graphql).await
    }

    async fn all_products(&self) -> ServerResult<Vec<CatalogEntry>> {
        let graphql = r#"{
  products(first: 200, query: "status:active published_status:published") {
    edges {
      node {
        id title handle vendor productType status totalInventory
        featuredImage { url }
        variants(first: 10) { edges { node { id price availableForSale inventoryQuantity } } }
      }
    }
  }
}"#;
        self.run_query(graphql).await
    }
}

/// Maps a GraphQL response body onto domain entries.
///
/// Tolerant of sparse nodes: missing fields become empty strings or `None`, a
/// missing edge list yields no entries. Nothing here is fatal.
pub fn parse_products(body: &Value) -> Vec<CatalogEntry> {
    let edges = body
        .pointer("/data/products/edges")
        .and_then(Value::as_array);

    let Some(edges) = edges else {
        return Vec::new();
    };

    edges
        .iter()
        .filter_map(|edge| edge.get("node"))
        .map(parse_entry)
        .collect()
}

fn parse_entry(node: &Value) -> CatalogEntry {
    let variants = node
        .pointer("/variants/edges")
        .and_then(Value::as_array)
        .map(|edges| {
            edges
                .iter()
                .filter_map(|edge| edge.get("node"))
                .map(parse_variant)
                .collect()
        })
        .unwrap_or_default();

    CatalogEntry {
        id: str_field(node, "id"),
        title: str_field(node, "title"),
        vendor: str_field(node, "vendor"),
        category: str_field(node, "productType"),
        total_inventory: node
            .get("totalInventory")
            .and_then(Value::as_i64)
            .unwrap_or(0),
        image_url: node
            .pointer("/featuredImage/url")
            .and_then(Value::as_str)
            .map(str::to_string),
        handle: str_field(node, "handle"),
        variants,
    }
}

fn parse_variant(node: &Value) -> Variant {
    Variant {
        id: str_field(node, "id"),
        price: node
            .get("price")
            .and_then(Value::as_str)
            .map(str::to_string),
        available_for_sale: node
            .get("availableForSale")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        inventory_quantity: node.get("inventoryQuantity").and_then(Value::as_i64),
    }
}

fn str_field(node: &Value, key: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_full_product_node() {
        let body = json!({
            "data": { "products": { "edges": [ { "node": {
                "id": "gid://shopify/Product/1",
                "title": "Color Extend Shampoo",
                "handle": "color-extend-shampoo",
                "vendor": "Redken",
                "productType": "Shampoo",
                "totalInventory": 7,
                "featuredImage": { "url": "https://cdn.example.com/a.jpg" },
                "variants": { "edges": [ { "node": {
                    "id": "gid://shopify/ProductVariant/11",
                    "price": "24.50",
                    "availableForSale": true,
                    "inventoryQuantity": 7
                } } ] }
            } } ] } }
        });

        let entries = parse_products(&body);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.title, "Color Extend Shampoo");
        assert_eq!(entry.vendor, "Redken");
        assert_eq!(entry.category, "Shampoo");
        assert_eq!(entry.total_inventory, 7);
        assert_eq!(entry.handle, "color-extend-shampoo");
        assert_eq!(entry.image_url.as_deref(), Some("https://cdn.example.com/a.jpg"));
        assert_eq!(entry.variants.len(), 1);
        assert!(entry.variants[0].available_for_sale);
        assert_eq!(entry.variants[0].price.as_deref(), Some("24.50"));
    }

    #[test]
    fn tolerates_partially_populated_nodes() {
        let body = json!({
            "data": { "products": { "edges": [ { "node": {
                "id": "gid://shopify/Product/2",
                "title": "Mystery Item"
            } } ] } }
        });

        let entries = parse_products(&body);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry.vendor, "");
        assert_eq!(entry.total_inventory, 0);
        assert!(entry.image_url.is_none());
        assert!(entry.variants.is_empty());
    }

    #[test]
    fn missing_edges_yield_no_entries() {
        assert!(parse_products(&json!({})).is_empty());
        assert!(parse_products(&json!({"data": {"products": {}}})).is_empty());
        assert!(parse_products(&json!({"errors": [{"message": "boom"}]})).is_empty());
    }
}
