use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Landing page HTML", content_type = "text/html")
    ),
    tag = "General"
)]
pub async fn root() -> Html<&'static str> {
    Html(r#"
        <!DOCTYPE html>
        <html lang="en">
        <head>
            <meta charset="UTF-8">
            <title>Portal Pagination</title>
            <style>
                body { margin: 40px; font-family: Arial, sans-serif; color: #0b0c0c; }
                code { background-color: #f3f2f1; padding: 2px 4px; }
                a { color: #1d70b8; }
            </style>
        </head>
        <body>
            <h1>Portal Pagination</h1>
            <p>Computes the pagination strip for grant result lists.</p>
            <p>Example: <a href="/pagination?total=100&amp;page=5"><code>/pagination?total=100&amp;page=5</code></a></p>
            <p><a href="/swagger-ui/">API docs</a></p>
        </body>
        </html>
    "#)
}
