//! Documents shared by the unit tests

use url::Url;

use crate::builder::CatalogBuilder;
use crate::config::LayoutMode;
use crate::document::SpecDocument;
use crate::tree::CatalogTree;

pub(crate) const PETSTORE_SWAGGER: &str = r##"{
  "swagger": "2.0",
  "host": "petstore.swagger.io",
  "basePath": "/v2",
  "schemes": ["https"],
  "tags": [{ "name": "pet" }, { "name": "store" }],
  "parameters": {
    "limitParam": { "name": "limit", "in": "query", "type": "integer" }
  },
  "paths": {
    "/pet/findByStatus": {
      "get": {
        "parameters": [
          {
            "name": "status",
            "in": "query",
            "required": true,
            "description": "Status values that need to be considered for filter",
            "type": "array",
            "items": { "type": "string", "enum": ["available", "pending", "sold"] }
          },
          { "$ref": "#/parameters/limitParam" }
        ]
      }
    },
    "/pet/{petId}": {
      "parameters": [
        { "name": "petId", "in": "path", "required": true, "type": "integer" }
      ],
      "get": {},
      "delete": {
        "parameters": [{ "name": "api_key", "in": "header" }]
      },
      "post": {
        "parameters": [{ "name": "name", "in": "formData" }]
      }
    },
    "/store/inventory": { "get": {} },
    "/pet/store/combo": { "put": {} }
  }
}"##;

pub(crate) const USERS_OPENAPI: &str = r#"openapi: 3.0.0
servers:
  - url: https://api.example.com/v1
tags:
  - name: users
paths:
  /users:
    get:
      parameters:
        - $ref: '#/components/parameters/Page'
    post: {}
  /users/{id}:
    get:
      parameters:
        - name: id
          in: path
          required: true
          schema:
            type: string
  /health:
    get: {}
components:
  parameters:
    Page:
      name: page
      in: query
      schema:
        type: integer
"#;

pub(crate) fn source() -> Url {
    Url::parse("https://petstore.swagger.io/v2/swagger.json").unwrap()
}

pub(crate) fn petstore_tree() -> CatalogTree {
    let doc = SpecDocument::from_slice(PETSTORE_SWAGGER.as_bytes()).unwrap();
    CatalogBuilder::new(LayoutMode::Auto)
        .build(&doc, &source())
        .unwrap()
}

/// Labels of `id`'s children
pub(crate) fn child_labels(tree: &CatalogTree, id: crate::model::NodeId) -> Vec<String> {
    tree.children(id)
        .iter()
        .map(|child| tree.label(*child).to_string())
        .collect()
}
