//! Collection query builder.
//!
//! Produces the filter and relation-expansion parameters the content API
//! understands, e.g. `/products?filters[documentId][$eq]=abc&populate=image`.

/// A relation-expansion directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Populate {
    /// `populate=*` - expand every first-level relation.
    All,
    /// `populate=<field>` - expand one relation.
    Field(String),
    /// `populate[<relation>]=*` - expand one relation with all its fields.
    Relation(String),
    /// `populate[<relation>][populate]=*` - expand a component and its relations.
    Deep(String),
}

impl Populate {
    fn to_param(&self) -> String {
        match self {
            Self::All => "populate=*".to_string(),
            Self::Field(field) => format!("populate={}", urlencoding::encode(field)),
            Self::Relation(relation) => format!("populate[{}]=*", relation),
            Self::Deep(relation) => format!("populate[{}][populate]=*", relation),
        }
    }
}

/// A query against one content collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    collection: String,
    filters: Vec<(String, String)>,
    populate: Vec<Populate>,
}

impl ContentQuery {
    /// Start a query for a collection (e.g. `"products"`).
    pub fn collection(name: impl Into<String>) -> Self {
        Self {
            collection: name.into(),
            filters: Vec::new(),
            populate: Vec::new(),
        }
    }

    /// Add an equality filter.
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    /// Add a relation-expansion directive.
    pub fn populate(mut self, populate: Populate) -> Self {
        self.populate.push(populate);
        self
    }

    /// Collection name.
    pub fn collection_name(&self) -> &str {
        &self.collection
    }

    /// Path and query string, relative to the API base URL.
    pub fn to_path(&self) -> String {
        let mut params: Vec<String> = self
            .filters
            .iter()
            .map(|(field, value)| {
                format!("filters[{}][$eq]={}", field, urlencoding::encode(value))
            })
            .collect();
        params.extend(self.populate.iter().map(Populate::to_param));

        if params.is_empty() {
            format!("/{}", self.collection)
        } else {
            format!("/{}?{}", self.collection, params.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populate_all() {
        let query = ContentQuery::collection("categories").populate(Populate::All);
        assert_eq!(query.to_path(), "/categories?populate=*");
    }

    #[test]
    fn test_filter_and_deep_populate() {
        let query = ContentQuery::collection("products")
            .filter_eq("documentId", "abc123")
            .populate(Populate::Deep("adonConfig".into()));
        assert_eq!(
            query.to_path(),
            "/products?filters[documentId][$eq]=abc123&populate[adonConfig][populate]=*"
        );
    }

    #[test]
    fn test_relation_and_field() {
        let addons = ContentQuery::collection("addons").populate(Populate::Relation("addonOptions".into()));
        assert_eq!(addons.to_path(), "/addons?populate[addonOptions]=*");

        let image = ContentQuery::collection("products")
            .filter_eq("documentId", "x")
            .populate(Populate::Field("image".into()));
        assert_eq!(image.to_path(), "/products?filters[documentId][$eq]=x&populate=image");
    }

    #[test]
    fn test_filter_value_is_encoded() {
        let query = ContentQuery::collection("products").filter_eq("documentId", "a&b c");
        assert_eq!(query.to_path(), "/products?filters[documentId][$eq]=a%26b%20c");
    }

    #[test]
    fn test_bare_collection() {
        assert_eq!(ContentQuery::collection("addons").to_path(), "/addons");
    }
}
