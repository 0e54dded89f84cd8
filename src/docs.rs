//! API documentation exposure.
//!
//! The OpenAPI document below is the single source of truth for the
//! described surface; it is hand-maintained next to the routes it describes
//! and served both as JSON and as a browsable Swagger UI page.

use axum::{
    Json,
    response::{Html, IntoResponse},
};
use serde_json::{Value, json};

#[must_use]
pub fn openapi_spec() -> Value {
    json!({
      "openapi": "3.0.3",
      "info": {
        "title": "habitd API",
        "description": "Minimal habit record-keeping service: create and list habit records over JSON.",
        "version": env!("CARGO_PKG_VERSION")
      },
      "paths": {
        "/api/health": {
          "get": {
            "summary": "Liveness check",
            "responses": {
              "200": {
                "description": "always ok",
                "content": {
                  "application/json": {
                    "schema": {
                      "type": "object",
                      "properties": {"ok": {"type": "boolean"}},
                      "example": {"ok": true}
                    }
                  }
                }
              }
            }
          }
        },
        "/api/habits": {
          "get": {
            "summary": "List all habits, newest first",
            "responses": {
              "200": {
                "description": "habits ordered by createdAt descending",
                "content": {
                  "application/json": {
                    "schema": {"type": "array", "items": {"$ref": "#/components/schemas/Habit"}}
                  }
                }
              },
              "500": {"description": "store failure", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}}
            }
          },
          "post": {
            "summary": "Create a habit",
            "requestBody": {
              "required": true,
              "content": {
                "application/json": {"schema": {"$ref": "#/components/schemas/HabitCreate"}}
              }
            },
            "responses": {
              "201": {
                "description": "created habit with assigned id and timestamps",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Habit"}}}
              },
              "400": {
                "description": "validation failure, every violated field reported",
                "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ValidationErrors"}}}
              },
              "500": {"description": "store failure", "content": {"application/json": {"schema": {"$ref": "#/components/schemas/ErrorResponse"}}}}
            }
          }
        },
        "/api/openapi.json": {
          "get": {
            "summary": "This document",
            "responses": {"200": {"description": "OpenAPI description of the service"}}
          }
        },
        "/": {
          "get": {
            "summary": "Interactive documentation",
            "responses": {"200": {"description": "browsable rendering of this document", "content": {"text/html": {}}}}
          }
        }
      },
      "components": {
        "schemas": {
          "Habit": {
            "type": "object",
            "required": ["id", "name", "cadence", "target", "startDate", "createdAt", "updatedAt"],
            "properties": {
              "id": {"type": "integer", "format": "int64", "readOnly": true},
              "name": {"type": "string", "minLength": 1},
              "cadence": {"type": "string", "enum": ["daily", "weekly"]},
              "target": {"type": "integer", "minimum": 1, "description": "occurrences per cadence period"},
              "startDate": {"type": "string", "description": "UTC timestamp"},
              "notes": {"type": "string"},
              "createdAt": {"type": "string", "readOnly": true},
              "updatedAt": {"type": "string", "readOnly": true}
            }
          },
          "HabitCreate": {
            "type": "object",
            "required": ["name"],
            "properties": {
              "name": {"type": "string", "minLength": 1},
              "cadence": {"type": "string", "enum": ["daily", "weekly"], "default": "daily"},
              "target": {"type": "integer", "minimum": 1, "default": 1},
              "startDate": {"type": "string", "description": "RFC 3339 timestamp, YYYY-MM-DD date, or epoch milliseconds; defaults to creation time"},
              "notes": {"type": "string"}
            }
          },
          "ValidationErrors": {
            "type": "object",
            "properties": {
              "errors": {
                "type": "object",
                "additionalProperties": {"type": "string"},
                "example": {"name": "name is required"}
              }
            }
          },
          "ErrorResponse": {
            "type": "object",
            "properties": {"error": {"type": "string"}}
          }
        }
      }
    })
}

pub async fn serve_openapi() -> impl IntoResponse {
    Json(openapi_spec())
}

pub async fn serve_docs() -> Html<&'static str> {
    Html(
        r##"
        <!doctype html>
        <html>
            <head>
                <title>habitd API</title>
                <meta charset="utf-8">
                <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
            </head>
            <body>
                <div id="swagger-ui"></div>
                <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
                <script>
                    window.onload = () => {
                        SwaggerUIBundle({
                            url: "/api/openapi.json",
                            dom_id: "#swagger-ui",
                        });
                    };
                </script>
            </body>
        </html>
        "##,
    )
}
