// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Web UI and JSON API for SyncMatch

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::analyzers::{Classifier, MediaUpload, SimulatedClassifier};
use crate::config::{AppConfig, BpmRange};
use crate::mood::MoodTag;
use crate::platform::{Platform, PlatformProfile};
use crate::report::{analyze_upload, resolve_all, resolve_one, AnalysisReport, ResolvedResult};
use crate::SyncMatchError;

/// Shared application state
pub struct AppState {
    pub config: AppConfig,
    pub classifier: Box<dyn Classifier>,
}

impl AppState {
    /// State backed by the simulated classifier
    pub fn new(config: AppConfig) -> Self {
        let classifier = Box::new(SimulatedClassifier::new(&config.analysis));
        Self { config, classifier }
    }
}

/// Create the web application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        // Pages
        .route("/", get(index_page))
        .route("/analyze", post(analyze_page))
        // API endpoints
        .route("/api/moods", get(api_get_moods))
        .route("/api/platforms", get(api_get_platforms))
        .route("/api/keywords", get(api_get_keywords))
        .route("/api/keywords/:platform/:mood", get(api_get_platform_keywords))
        .route("/api/analyze", post(api_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// === Errors ===

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// JSON error response for API routes
pub struct ApiError(SyncMatchError);

impl From<SyncMatchError> for ApiError {
    fn from(e: SyncMatchError) -> Self {
        Self(e)
    }
}

fn status_for(e: &SyncMatchError) -> StatusCode {
    if let SyncMatchError::UploadTooLarge(_) = e {
        StatusCode::PAYLOAD_TOO_LARGE
    } else if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            warn!("Request failed: {}", self.0);
        }
        (status, Json(ErrorResponse { error: self.0.to_string() })).into_response()
    }
}

// === Page Handlers ===

async fn index_page(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_index(&state.config))
}

async fn analyze_page(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let outcome = match read_upload(multipart).await {
        Ok((upload, hint)) => analyze_upload(state.classifier.as_ref(), &upload, hint).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => Html(render_report(&report)).into_response(),
        Err(e) => {
            warn!("Analysis rejected: {}", e);
            (status_for(&e), Html(render_error(&e))).into_response()
        }
    }
}

// === API Handlers ===

#[derive(Serialize)]
struct MoodInfo {
    key: &'static str,
    name: &'static str,
    label: &'static str,
    bpm_range: BpmRange,
}

async fn api_get_moods(State(state): State<Arc<AppState>>) -> Json<Vec<MoodInfo>> {
    let moods = MoodTag::ALL
        .into_iter()
        .map(|mood| MoodInfo {
            key: mood.key(),
            name: mood.name(),
            label: mood.label(),
            bpm_range: state.config.analysis.bpm_ranges.get(mood),
        })
        .collect();
    Json(moods)
}

async fn api_get_platforms() -> Json<Vec<&'static PlatformProfile>> {
    Json(Platform::ALL.into_iter().map(Platform::profile).collect())
}

#[derive(Deserialize)]
struct KeywordsQuery {
    mood: String,
}

async fn api_get_keywords(
    Query(query): Query<KeywordsQuery>,
) -> Result<Json<Vec<ResolvedResult>>, ApiError> {
    let mood: MoodTag = query.mood.parse()?;
    Ok(Json(resolve_all(mood)?))
}

async fn api_get_platform_keywords(
    Path((platform, mood)): Path<(String, String)>,
) -> Result<Json<ResolvedResult>, ApiError> {
    let platform: Platform = platform.parse()?;
    let mood: MoodTag = mood.parse()?;
    Ok(Json(resolve_one(platform, mood)?))
}

async fn api_analyze(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, ApiError> {
    let (upload, hint) = read_upload(multipart).await?;
    let report = analyze_upload(state.classifier.as_ref(), &upload, hint).await?;
    Ok(Json(report))
}

/// Pull the `file` and optional `mood` fields out of a form submission
async fn read_upload(mut multipart: Multipart) -> crate::Result<(MediaUpload, Option<MoodTag>)> {
    let mut upload: Option<MediaUpload> = None;
    let mut hint: Option<MoodTag> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error(e, "Malformed form data"))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(String::from);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| upload_error(e, "Failed to read file"))?;
                if !file_name.is_empty() {
                    upload = Some(MediaUpload::new(file_name, content_type, bytes.to_vec()));
                }
            }
            "mood" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| upload_error(e, "Failed to read mood"))?;
                if !value.trim().is_empty() {
                    hint = Some(value.parse()?);
                }
            }
            _ => {}
        }
    }

    let upload = upload.ok_or_else(|| SyncMatchError::Upload("No file uploaded".to_string()))?;
    Ok((upload, hint))
}

/// Keep the body-limit rejection distinct from other malformed submissions
fn upload_error(e: MultipartError, context: &str) -> SyncMatchError {
    let message = format!("{}: {}", context, e.body_text());
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        SyncMatchError::UploadTooLarge(message)
    } else {
        SyncMatchError::Upload(message)
    }
}

// === Template Rendering ===

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn base_template(title: &str, content: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - SyncMatch</title>
    <style>
        :root {{
            --bg-primary: #f8f9fa;
            --bg-card: #ffffff;
            --bg-metric: #eff6ff;
            --text-primary: #1f2937;
            --text-secondary: #6b7280;
            --accent: #4f46e5;
            --border: #e5e7eb;
        }}
        * {{ box-sizing: border-box; margin: 0; padding: 0; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            background: var(--bg-primary);
            color: var(--text-primary);
            line-height: 1.6;
        }}
        .container {{ max-width: 1400px; margin: 0 auto; padding: 20px; }}
        nav {{
            background: var(--bg-card);
            padding: 15px 20px;
            display: flex;
            align-items: center;
            gap: 30px;
            border-bottom: 1px solid var(--border);
        }}
        nav .logo {{
            font-size: 1.5em;
            font-weight: bold;
            color: var(--accent);
            text-decoration: none;
        }}
        nav a {{ color: var(--text-secondary); text-decoration: none; }}
        nav a:hover {{ color: var(--text-primary); }}
        h1 {{ margin-bottom: 15px; }}
        .card {{
            background: var(--bg-card);
            border: 1px solid var(--border);
            border-radius: 12px;
            padding: 20px;
            margin-bottom: 20px;
        }}
        .card h2 {{ margin-bottom: 15px; }}
        .columns {{
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
            gap: 20px;
        }}
        .platform-musicbed h2 {{ border-bottom: 3px solid #f97316; }}
        .platform-artlist h2 {{ border-bottom: 3px solid #eab308; }}
        .platform-premiumbeat h2 {{ border-bottom: 3px solid #3b82f6; }}
        pre {{
            background: var(--bg-primary);
            border-radius: 6px;
            padding: 12px;
            margin-bottom: 15px;
            white-space: pre-wrap;
        }}
        .button, button {{
            display: block;
            width: 100%;
            border: none;
            border-radius: 8px;
            padding: 10px;
            background: var(--accent);
            color: white;
            text-align: center;
            text-decoration: none;
            font-size: 1em;
            cursor: pointer;
        }}
        .metric {{
            background: var(--bg-metric);
            border-radius: 8px;
            padding: 10px;
        }}
        .metric .number {{ font-size: 2em; font-weight: bold; color: var(--accent); }}
        .metric .label {{ color: var(--text-secondary); font-size: 0.9em; }}
        .moods label {{ display: block; margin: 6px 0; }}
        .error {{ border-color: #ef4444; }}
        table {{ width: 100%; border-collapse: collapse; }}
        td {{ padding: 8px; border-bottom: 1px solid var(--border); }}
    </style>
</head>
<body>
    <nav>
        <a href="/" class="logo">SyncMatch</a>
        <a href="/">Analyze</a>
        <a href="/api/moods">Moods</a>
        <a href="/api/platforms">Platforms</a>
    </nav>
    <main class="container">
        {}
    </main>
</body>
</html>"#, html_escape(title), content)
}

fn render_index(config: &AppConfig) -> String {
    let accept: String = config.analysis.accepted_extensions.iter()
        .map(|ext| format!(".{}", ext))
        .collect::<Vec<_>>()
        .join(",");

    let moods_html: String = MoodTag::ALL.iter()
        .map(|mood| format!(
            r#"<label><input type="radio" name="mood" value="{}"{}> {} ({})</label>"#,
            mood.key(),
            if *mood == config.analysis.default_mood { " checked" } else { "" },
            html_escape(mood.label()),
            mood.name(),
        ))
        .collect();

    let formats = config.analysis.accepted_extensions.iter()
        .map(|ext| ext.to_uppercase())
        .collect::<Vec<_>>()
        .join("/");

    let content = format!(r#"
        <h1>SyncMatch: music keyword finder</h1>
        <p>Upload a reference video or audio file and get ready-made search keywords
        for <strong>Musicbed</strong>, <strong>Artlist</strong> and <strong>PremiumBeat</strong>,
        with one-click links to each platform's search results.</p>
        <div class="columns" style="margin-top: 20px;">
            <div class="card">
                <h2>Upload &amp; analyze</h2>
                <form action="/analyze" method="post" enctype="multipart/form-data">
                    <p><input type="file" name="file" accept="{}" required></p>
                    <p class="label">Supported formats: {} (up to {} MB)</p>
                    <div class="moods" style="margin: 15px 0;">
                        <strong>Confirm the style of the footage</strong>
                        {}
                    </div>
                    <button type="submit">Generate keywords</button>
                </form>
            </div>
            <div class="card">
                <h2>How it works</h2>
                <ol style="margin-left: 20px;">
                    <li>Upload a video or audio file ({}).</li>
                    <li>Wait for the audio analysis to finish.</li>
                    <li>Confirm the detected style tag.</li>
                    <li>Copy the platform keywords or follow the search links.</li>
                </ol>
            </div>
        </div>
    "#,
        html_escape(&accept),
        html_escape(&formats),
        config.web.max_upload_mb,
        moods_html,
        html_escape(&formats),
    );

    base_template("Analyze", &content)
}

fn render_platform_card(result: &ResolvedResult) -> String {
    format!(r#"
        <div class="card platform-{}">
            <h2>{}</h2>
            <p><strong>Search tags:</strong></p>
            <pre>{}</pre>
            <a class="button" href="{}" target="_blank" rel="noopener noreferrer">Search on {}</a>
        </div>
    "#,
        result.platform.id(),
        html_escape(result.platform_name),
        html_escape(&result.display_text),
        html_escape(&result.search_url),
        html_escape(result.platform_name),
    )
}

fn render_report(report: &AnalysisReport) -> String {
    let cards: String = report.results.iter().map(render_platform_card).collect();

    let bpm = report.bpm
        .map(|b| format!("{} BPM", b))
        .unwrap_or_else(|| "-".to_string());

    let content = format!(r#"
        <h1>Analysis report: {} ({})</h1>
        <div class="columns">
            <div class="card">
                <h2>File</h2>
                <table>
                    <tr><td>Name</td><td>{}</td></tr>
                    <tr><td>Type</td><td>{}</td></tr>
                    <tr><td>Size</td><td>{} bytes</td></tr>
                </table>
            </div>
            <div class="card">
                <h2>Audio features</h2>
                <div class="metric">
                    <div class="label">Estimated tempo</div>
                    <div class="number">{}</div>
                </div>
            </div>
        </div>
        <p style="margin-bottom: 20px;">Copy the keyword blocks below, or use the buttons to open each platform's search page.</p>
        <div class="columns">
            {}
        </div>
    "#,
        html_escape(report.mood_label),
        report.mood.name(),
        html_escape(&report.file.name),
        html_escape(report.file.content_type.as_deref().unwrap_or("unknown")),
        report.file.size_bytes,
        bpm,
        cards,
    );

    base_template(&format!("Report: {}", report.mood.name()), &content)
}

fn render_error(error: &SyncMatchError) -> String {
    let content = format!(r#"
        <h1>Could not analyze the file</h1>
        <div class="card error">
            <p>{}</p>
            <p style="margin-top: 15px;"><a href="/">Back</a></p>
        </div>
    "#, html_escape(&error.to_string()));

    base_template("Error", &content)
}

/// Start the web server with the given config
pub async fn start_server(config: AppConfig) -> crate::Result<()> {
    let addr = format!("{}:{}", config.web.host, config.web.port);
    let state = Arc::new(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Web UI available at http://{}", addr);

    let router = create_router(state);
    axum::serve(listener, router).await
        .map_err(|e| SyncMatchError::Config(format!("Server error: {}", e)))?;

    Ok(())
}
