pub fn render_index(total_points: u64, chart_svg: &str) -> String {
    INDEX_HTML
        .replace("{{TOTAL_POINTS}}", &total_points.to_string())
        .replace("{{CHART}}", chart_svg)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Migraine Watch</title>
  <style>
    :root {
      --bg: #0f172a;
      --card: #1e293b;
      --border: #273549;
      --ink: #e2e8f0;
      --muted: #94a3b8;
      --blue: #3b82f6;
      --green: #22c55e;
      --amber: #f59e0b;
      --red: #ef4444;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border: 1px solid var(--border);
      border-radius: 20px;
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header {
      display: flex;
      justify-content: space-between;
      align-items: baseline;
      gap: 12px;
      flex-wrap: wrap;
    }

    h1 {
      margin: 0;
      font-size: clamp(1.6rem, 4vw, 2.2rem);
    }

    .points {
      color: var(--muted);
    }

    .points strong {
      color: var(--amber);
    }

    .search {
      display: flex;
      gap: 12px;
    }

    .search input {
      flex: 1;
      padding: 12px 16px;
      border-radius: 12px;
      border: 1px solid var(--border);
      background: var(--bg);
      color: var(--ink);
      font-size: 1rem;
    }

    .search button {
      padding: 12px 20px;
      border: none;
      border-radius: 12px;
      background: var(--blue);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .search button:disabled {
      opacity: 0.6;
      cursor: wait;
    }

    .loading {
      display: inline-block;
      width: 12px;
      height: 12px;
      border: 2px solid rgba(255, 255, 255, 0.4);
      border-top-color: white;
      border-radius: 50%;
      animation: spin 700ms linear infinite;
      vertical-align: middle;
    }

    .weather-info {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .info-block {
      background: var(--bg);
      border: 1px solid var(--border);
      border-radius: 14px;
      padding: 16px;
    }

    .info-block h4 {
      margin: 0 0 8px;
      color: var(--muted);
      font-weight: 500;
    }

    .risk-badge {
      display: inline-block;
      padding: 4px 12px;
      border-radius: 999px;
      font-weight: 600;
    }

    .risk-low {
      background: rgba(34, 197, 94, 0.15);
      color: var(--green);
    }

    .risk-medium {
      background: rgba(245, 158, 11, 0.15);
      color: var(--amber);
    }

    .risk-high {
      background: rgba(239, 68, 68, 0.15);
      color: var(--red);
    }

    .error {
      color: var(--red);
    }

    #graph {
      width: 100%;
      min-height: 250px;
    }

    #graph svg {
      display: block;
      width: 100%;
      height: 250px;
    }

    @keyframes spin {
      to {
        transform: rotate(360deg);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Migraine Watch</h1>
      <span class="points">Total points: <strong id="totalPoints">{{TOTAL_POINTS}}</strong></span>
    </header>

    <section class="search">
      <input id="cityInput" type="text" placeholder="Enter a city" autocomplete="off" />
      <button id="checkBtn" type="button">Check Weather</button>
    </section>

    <section id="results"></section>

    <section id="graph">{{CHART}}</section>
  </main>

  <script>
    const checkBtn = document.getElementById('checkBtn');
    const cityInput = document.getElementById('cityInput');
    const resultsEl = document.getElementById('results');
    const graphEl = document.getElementById('graph');
    const totalPointsEl = document.getElementById('totalPoints');

    let pendingFrame = null;

    const setLoading = (isLoading) => {
      checkBtn.disabled = isLoading;
      checkBtn.innerHTML = isLoading ? '<span class="loading"></span> Loading' : 'Check Weather';
    };

    const showError = (message) => {
      resultsEl.innerHTML = '';
      const p = document.createElement('p');
      p.className = 'error';
      p.textContent = message;
      resultsEl.appendChild(p);
    };

    const escapeHtml = (value) =>
      String(value).replace(/[&<>"]/g, (c) => ({ '&': '&amp;', '<': '&lt;', '>': '&gt;', '"': '&quot;' })[c]);

    const renderReport = (report) => {
      const c = report.conditions;
      resultsEl.innerHTML = `
        <h3>Weather Analysis: ${escapeHtml(report.city)}</h3>
        <div class="weather-info">
          <div class="info-block">
            <h4>Conditions</h4>
            <p>Temperature: ${c.temp_c}°C<br>Humidity: ${c.humidity}%<br>Pressure: ${c.pressure_mb} mb<br>Wind: ${c.wind_kph} kph</p>
          </div>
          <div class="info-block">
            <h4>Migraine Risk</h4>
            <p><span class="risk-badge ${report.risk.class}">${report.risk.label}</span></p>
            <p>Score: ${report.score}/100</p>
          </div>
          <div class="info-block">
            <h4>Points</h4>
            <p>Earned: +${report.points_earned}</p>
          </div>
        </div>`;
      totalPointsEl.textContent = report.total_points;
    };

    // Bumped on every new animation; a loop whose generation is stale stops.
    let generation = 0;

    const step = (loop) => async () => {
      if (loop !== generation) {
        return;
      }
      const width = Math.round(graphEl.offsetWidth) || 640;
      const res = await fetch(`/api/chart?width=${width}`);
      if (loop !== generation) {
        return;
      }
      if (!res.ok) {
        pendingFrame = null;
        return;
      }
      const frame = await res.json();
      if (loop !== generation) {
        return;
      }
      graphEl.innerHTML = frame.svg;
      pendingFrame = frame.done ? null : requestAnimationFrame(step(loop));
    };

    const animate = () => {
      if (pendingFrame) {
        cancelAnimationFrame(pendingFrame);
      }
      generation += 1;
      pendingFrame = requestAnimationFrame(step(generation));
    };

    checkBtn.addEventListener('click', async () => {
      const city = cityInput.value.trim();
      if (!city) {
        showError('Please enter a city');
        return;
      }

      setLoading(true);
      try {
        const res = await fetch('/api/check', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: JSON.stringify({ city })
        });
        if (!res.ok) {
          showError((await res.text()) || 'Request failed');
          return;
        }
        renderReport(await res.json());
        animate();
      } catch (err) {
        showError('Weather service unavailable');
      } finally {
        setLoading(false);
      }
    });

    cityInput.addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        checkBtn.click();
      }
    });

    window.addEventListener('resize', () => {
      if (!pendingFrame) {
        animate();
      }
    });
  </script>
</body>
</html>
"#;
