use worker::{Headers, Response, Result};

use crate::constants::{API_TITLE, SWAGGER_UI_VERSION};
use crate::openapi::get_openapi_json;
use crate::utils::CONTENT_TYPE_JSON;

/// `OpenAPI` 仕様の配信パス
pub const OPENAPI_PATH: &str = "/openapi.json";

/// `OpenAPI` JSON エンドポイント
/// GET /openapi.json
pub fn openapi_json() -> Result<Response> {
    let headers = Headers::new();
    headers.set(CONTENT_TYPE_JSON.0, CONTENT_TYPE_JSON.1)?;

    Ok(Response::ok(get_openapi_json())?.with_headers(headers))
}

/// Swagger UI
/// GET /docs
pub fn swagger_ui() -> Result<Response> {
    Response::from_html(swagger_ui_html(OPENAPI_PATH))
}

fn swagger_ui_html(openapi_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{API_TITLE} - Swagger UI</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui.css">
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@{SWAGGER_UI_VERSION}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = () => {{
            SwaggerUIBundle({{
                url: '{openapi_url}',
                dom_id: '#swagger-ui',
                presets: [SwaggerUIBundle.presets.apis],
                layout: 'BaseLayout'
            }});
        }};
    </script>
</body>
</html>"#
    )
}
