//! OpenAPI 3.0 description of the HTTP API
//!
//! Served at `/api-docs.json` and written to disk by `cargo xtask
//! generate-openapi`.

use serde_json::{json, Value};

use breeds_common::types::BREED_GROUPS;

pub const API_TITLE: &str = "Dog Breeds API";
pub const API_VERSION: &str = "1.0.0";
pub const API_DESCRIPTION: &str =
    "A REST API for managing dog breeds with full CRUD operations, search, and pagination.";

/// Build the OpenAPI document
pub fn document() -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION,
            "license": { "name": "MIT", "url": "https://opensource.org/licenses/MIT" }
        },
        "servers": [
            { "url": "http://localhost:3000", "description": "Development server" }
        ],
        "tags": [
            { "name": "Health", "description": "Health check and API information endpoints" },
            { "name": "Breeds", "description": "Dog breed management operations" }
        ],
        "paths": paths(),
        "components": {
            "schemas": schemas(),
            "parameters": parameters()
        }
    })
}

fn paths() -> Value {
    json!({
        "/": {
            "get": {
                "tags": ["Health"],
                "summary": "API information",
                "responses": { "200": envelope_ref("ApiResponse", "API information") }
            }
        },
        "/health": {
            "get": {
                "tags": ["Health"],
                "summary": "Health check",
                "responses": {
                    "200": envelope_ref("HealthResponse", "API and database are healthy"),
                    "503": envelope_ref("ErrorResponse", "Database unavailable")
                }
            }
        },
        "/api/breeds": {
            "get": {
                "tags": ["Breeds"],
                "summary": "List breeds",
                "description": "Breeds ordered by name, one page at a time",
                "parameters": [param_ref("Page"), param_ref("Limit")],
                "responses": {
                    "200": envelope_ref("PaginatedResponse", "One page of breeds"),
                    "400": envelope_ref("ErrorResponse", "Invalid pagination parameters"),
                    "500": envelope_ref("ErrorResponse", "Internal server error")
                }
            },
            "post": {
                "tags": ["Breeds"],
                "summary": "Create a breed",
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/CreateDogBreedRequest" }
                        }
                    }
                },
                "responses": {
                    "201": breed_response("Breed created successfully"),
                    "400": envelope_ref("ErrorResponse", "Validation failed"),
                    "409": envelope_ref("ErrorResponse", "A breed with this name already exists"),
                    "500": envelope_ref("ErrorResponse", "Internal server error")
                }
            }
        },
        "/api/breeds/search": {
            "get": {
                "tags": ["Breeds"],
                "summary": "Search breeds",
                "description": "Case-insensitive substring match on name, breed group and temperament",
                "parameters": [param_ref("SearchQuery")],
                "responses": {
                    "200": {
                        "description": "Matching breeds",
                        "content": {
                            "application/json": {
                                "schema": {
                                    "allOf": [
                                        { "$ref": "#/components/schemas/ApiResponse" },
                                        {
                                            "type": "object",
                                            "properties": {
                                                "data": {
                                                    "type": "array",
                                                    "items": { "$ref": "#/components/schemas/DogBreed" }
                                                }
                                            }
                                        }
                                    ]
                                }
                            }
                        }
                    },
                    "400": envelope_ref("ErrorResponse", "Search query is required"),
                    "500": envelope_ref("ErrorResponse", "Internal server error")
                }
            }
        },
        "/api/breeds/{id}": {
            "get": {
                "tags": ["Breeds"],
                "summary": "Get a breed by id",
                "parameters": [param_ref("BreedId")],
                "responses": {
                    "200": breed_response("The breed"),
                    "400": envelope_ref("ErrorResponse", "Invalid breed ID"),
                    "404": envelope_ref("ErrorResponse", "Breed not found"),
                    "500": envelope_ref("ErrorResponse", "Internal server error")
                }
            },
            "put": {
                "tags": ["Breeds"],
                "summary": "Update a breed",
                "description": "Only the supplied fields change; `image_url: null` removes the image",
                "parameters": [param_ref("BreedId")],
                "requestBody": {
                    "required": true,
                    "content": {
                        "application/json": {
                            "schema": { "$ref": "#/components/schemas/UpdateDogBreedRequest" }
                        }
                    }
                },
                "responses": {
                    "200": breed_response("Breed updated successfully"),
                    "400": envelope_ref("ErrorResponse", "Invalid breed ID or validation failed"),
                    "404": envelope_ref("ErrorResponse", "Breed not found"),
                    "409": envelope_ref("ErrorResponse", "A breed with this name already exists"),
                    "500": envelope_ref("ErrorResponse", "Internal server error")
                }
            },
            "delete": {
                "tags": ["Breeds"],
                "summary": "Delete a breed",
                "parameters": [param_ref("BreedId")],
                "responses": {
                    "200": envelope_ref("ApiResponse", "Breed deleted successfully"),
                    "400": envelope_ref("ErrorResponse", "Invalid breed ID"),
                    "404": envelope_ref("ErrorResponse", "Breed not found"),
                    "500": envelope_ref("ErrorResponse", "Internal server error")
                }
            }
        }
    })
}

fn schemas() -> Value {
    let range = |unit: &str, kind: &str, min: f64, max: f64| {
        json!({
            "type": "object",
            "description": format!("Inclusive range in {unit}; min must not exceed max"),
            "properties": {
                "min": { "type": kind, "minimum": min, "maximum": max },
                "max": { "type": kind, "minimum": min, "maximum": max }
            },
            "required": ["min", "max"]
        })
    };

    let breed_fields = json!({
        "name": { "type": "string", "minLength": 1, "maxLength": 100, "example": "Golden Retriever" },
        "breed_group": {
            "type": "string",
            "minLength": 1,
            "maxLength": 50,
            "example": "Sporting",
            "description": format!("Usually one of: {}", BREED_GROUPS.join(", "))
        },
        "temperament": {
            "type": "string",
            "minLength": 1,
            "maxLength": 200,
            "example": "Friendly, Intelligent, Devoted"
        },
        "life_span": { "type": "string", "minLength": 1, "maxLength": 50, "example": "10-12 years" },
        "height_cm": range("centimetres", "integer", 1.0, 200.0),
        "weight_kg": range("kilograms", "number", 0.1, 200.0),
        "description": { "type": "string", "minLength": 10, "maxLength": 1000 },
        "image_url": { "type": "string", "format": "uri", "nullable": true }
    });

    let required = json!([
        "name",
        "breed_group",
        "temperament",
        "life_span",
        "height_cm",
        "weight_kg",
        "description"
    ]);

    let mut dog_breed = breed_fields.clone();
    if let Some(fields) = dog_breed.as_object_mut() {
        fields.insert("id".to_string(), json!({ "type": "integer", "example": 1 }));
        fields.insert("created_at".to_string(), json!({ "type": "string", "format": "date-time" }));
        fields.insert("updated_at".to_string(), json!({ "type": "string", "format": "date-time" }));
    }

    json!({
        "DogBreed": {
            "type": "object",
            "properties": dog_breed,
            "required": required
        },
        "CreateDogBreedRequest": {
            "type": "object",
            "properties": breed_fields,
            "required": required
        },
        "UpdateDogBreedRequest": {
            "type": "object",
            "properties": breed_fields
        },
        "ApiResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean", "example": true },
                "data": { "type": "object" },
                "message": { "type": "string" },
                "error": { "type": "string" }
            },
            "required": ["success"]
        },
        "PaginatedResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean", "example": true },
                "data": { "type": "array", "items": { "$ref": "#/components/schemas/DogBreed" } },
                "pagination": {
                    "type": "object",
                    "properties": {
                        "page": { "type": "integer", "example": 1 },
                        "limit": { "type": "integer", "example": 10 },
                        "total": { "type": "integer", "example": 50 },
                        "totalPages": { "type": "integer", "example": 5 }
                    }
                }
            },
            "required": ["success"]
        },
        "ErrorResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean", "example": false },
                "error": { "type": "string", "example": "Validation failed" },
                "message": { "type": "string", "example": "Name is required and must be 1-100 characters" }
            },
            "required": ["success", "error"]
        },
        "HealthResponse": {
            "type": "object",
            "properties": {
                "success": { "type": "boolean", "example": true },
                "data": {
                    "type": "object",
                    "properties": {
                        "status": { "type": "string", "example": "OK" },
                        "timestamp": { "type": "string", "format": "date-time" },
                        "database": { "type": "string", "example": "connected" }
                    }
                },
                "message": { "type": "string", "example": "Dog Breeds API is running" }
            }
        }
    })
}

fn parameters() -> Value {
    json!({
        "Page": {
            "name": "page",
            "in": "query",
            "description": "Page number for pagination",
            "required": false,
            "schema": { "type": "integer", "default": 1, "minimum": 1 }
        },
        "Limit": {
            "name": "limit",
            "in": "query",
            "description": "Number of items per page",
            "required": false,
            "schema": { "type": "integer", "default": 10, "minimum": 1, "maximum": 100 }
        },
        "SearchQuery": {
            "name": "q",
            "in": "query",
            "description": "Search query for breed name, group, or temperament",
            "required": true,
            "schema": { "type": "string", "minLength": 1 }
        },
        "BreedId": {
            "name": "id",
            "in": "path",
            "description": "Breed ID",
            "required": true,
            "schema": { "type": "integer", "minimum": 1 }
        }
    })
}

fn envelope_ref(schema: &str, description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": { "$ref": format!("#/components/schemas/{schema}") }
            }
        }
    })
}

fn breed_response(description: &str) -> Value {
    json!({
        "description": description,
        "content": {
            "application/json": {
                "schema": {
                    "allOf": [
                        { "$ref": "#/components/schemas/ApiResponse" },
                        {
                            "type": "object",
                            "properties": { "data": { "$ref": "#/components/schemas/DogBreed" } }
                        }
                    ]
                }
            }
        }
    })
}

fn param_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/parameters/{name}") })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = document();
        let paths = doc["paths"].as_object().expect("paths object");

        for path in ["/", "/health", "/api/breeds", "/api/breeds/search", "/api/breeds/{id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        for method in ["get", "put", "delete"] {
            assert!(doc["paths"]["/api/breeds/{id}"].get(method).is_some());
        }
    }

    #[test]
    fn test_references_resolve() {
        let doc = document();
        let text = doc.to_string();

        for reference in text.split("\"$ref\":\"").skip(1) {
            let target = reference.split('"').next().expect("closing quote");
            let mut node = &doc;
            for part in target.trim_start_matches("#/").split('/') {
                node = &node[part];
            }
            assert!(!node.is_null(), "dangling reference {target}");
        }
    }

    #[test]
    fn test_create_request_requires_core_fields() {
        let doc = document();
        let required = &doc["components"]["schemas"]["CreateDogBreedRequest"]["required"];
        assert_eq!(required.as_array().map(Vec::len), Some(7));
        assert!(doc["components"]["schemas"]["UpdateDogBreedRequest"]
            .get("required")
            .is_none());
    }
}
