//! Presentational UI fragments. No state, no logic.

/// Site footer markup, served as-is
pub const FOOTER_HTML: &str = r#"<footer class="site-footer">
  <div class="footer-links">
    <a href="/models">Browse models</a>
    <a href="/swagger-ui">API</a>
    <a href="https://github.com/model-hub" rel="noopener">Source</a>
  </div>
  <p class="footer-note">Community-maintained model directory.</p>
</footer>
"#;
