/// The work log page. All behaviour lives in the `work_log_client` wasm
/// module served from `/pkg`; the QR widget comes from qrcodejs.
pub fn render_index() -> &'static str {
    INDEX_HTML
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Work Log</title>
  <style>
    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    form {
      display: grid;
      gap: 14px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      color: #5f5c57;
    }

    input,
    textarea {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent-2);
      color: white;
    }

    button[type="submit"] {
      background: var(--accent);
    }

    .message {
      min-height: 1.2em;
      margin: 0;
    }

    .message.error {
      color: #c63b2b;
    }

    .message.success {
      color: #2d7a4b;
    }

    .summary-table {
      width: 100%;
      border-collapse: collapse;
      background: white;
      border-radius: 12px;
      overflow: hidden;
    }

    .summary-table th,
    .summary-table td {
      text-align: left;
      padding: 10px 14px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    .qr-row {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
    }

    .qr-row input {
      flex: 1 1 220px;
    }

    #qrCodeImageContainer {
      margin-top: 16px;
      min-height: 128px;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Work Log</h1>
    </header>

    <section>
      <h2>Log work</h2>
      <form id="workLogForm" novalidate>
        <label>Project Number
          <input type="text" id="project_number" name="project_number" />
        </label>
        <label>Worker Name
          <input type="text" id="worker_name" name="worker_name" />
        </label>
        <label>Work Details
          <textarea id="work_details" name="work_details" rows="3"></textarea>
        </label>
        <label>Work Time (Hours)
          <input type="number" id="work_time_hours" name="work_time_hours" step="0.25" min="0" />
        </label>
        <button type="submit">Submit</button>
      </form>
      <p id="messageArea" class="message"></p>
    </section>

    <section>
      <h2>Hours by project</h2>
      <button type="button" id="loadSummaryBtn">Load Summary</button>
      <div id="summaryTableContainer"></div>
    </section>

    <section>
      <h2>Pre-fill QR code</h2>
      <div class="qr-row">
        <input type="text" id="qrDataInput" placeholder="Project number or worker name" />
        <button type="button" id="generateQrBtn">Generate QR Code</button>
      </div>
      <div id="qrCodeImageContainer"></div>
    </section>
  </main>

  <script src="https://cdnjs.cloudflare.com/ajax/libs/qrcodejs/1.0.0/qrcode.min.js"></script>
  <script type="module">
    import init from '/pkg/work_log_client.js';
    init();
  </script>
</body>
</html>
"#;
