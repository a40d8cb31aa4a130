// Route path constants - single source of truth for all paths

pub const HELLO: &str = "/hello";
pub const HELLO_DETAILS: &str = "/hello/details";

pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
