fn main() {
    // Rerun if frontend changes
    println!("cargo:rerun-if-changed=frontend/");

    // Check if frontend directory exists
    let frontend_path = std::path::Path::new("frontend");
    if !frontend_path.join("index.html").exists() {
        eprintln!("Warning: frontend/index.html not found, writing placeholder.");

        std::fs::create_dir_all("frontend").ok();
        std::fs::write(
            "frontend/index.html",
            r#"<!DOCTYPE html>
<html>
<head>
    <title>API Request Tester</title>
    <style>
        body { font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: #1a1a2e; color: #eee; }
        .message { text-align: center; }
        code { background: #333; padding: 2px 8px; border-radius: 4px; }
    </style>
</head>
<body>
    <div class="message">
        <h1>API Request Tester Backend</h1>
        <p>API is running. Frontend not embedded.</p>
        <p>Restore <code>frontend/index.html</code> and rebuild to embed the tester UI.</p>
    </div>
</body>
</html>"#,
        ).ok();
    }
}
