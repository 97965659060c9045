pub fn render_index(today: &str, total_ticks: usize) -> String {
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{TOTAL}}", &total_ticks.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Climbing Days</title>
  <style>
    :root {
      --bg: #f3f1ec;
      --ink: #25282b;
      --muted: #6f6a63;
      --card: #ffffff;
      --rest: #d9d4cb;
      --spring: #7cb36b;
      --summer: #e8a43a;
      --fall: #c4623a;
      --winter: #4f7fb8;
      --shadow: 0 18px 40px rgba(37, 40, 43, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", "Segoe UI", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 16px 48px;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 24px;
    }

    header h1 {
      margin: 0;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
    }

    header p {
      margin: 6px 0 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 24px;
      display: grid;
      gap: 18px;
    }

    .controls {
      display: grid;
      gap: 12px;
    }

    .group {
      display: flex;
      flex-wrap: wrap;
      gap: 6px;
      align-items: center;
    }

    .group .caption {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
      min-width: 92px;
    }

    .group label {
      border-radius: 999px;
      padding: 6px 12px;
      background: rgba(37, 40, 43, 0.06);
      cursor: pointer;
      font-size: 0.9rem;
    }

    .group input {
      display: none;
    }

    .group input:checked + span {
      font-weight: 700;
      color: var(--winter);
    }

    svg {
      width: 100%;
      height: auto;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.85rem;
      color: var(--muted);
    }

    .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: middle;
    }

    .empty {
      color: var(--muted);
      text-align: center;
      padding: 40px 0;
    }

    form.log {
      display: flex;
      flex-wrap: wrap;
      gap: 10px;
    }

    form.log input {
      border: 1px solid var(--rest);
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    form.log button {
      border: none;
      border-radius: 10px;
      padding: 10px 18px;
      background: var(--ink);
      color: white;
      font-weight: 600;
      cursor: pointer;
    }

    .status {
      min-height: 1.2em;
      font-size: 0.9rem;
      color: var(--muted);
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Climbing days vs. rest days</h1>
      <p>Average days per week, by month. <span id="total">{{TOTAL}}</span> ticks logged.</p>
    </header>

    <section class="card">
      <div class="controls">
        <div class="group" id="discipline-group">
          <span class="caption">Discipline</span>
          <label><input type="radio" name="discipline" value="all" checked /><span>All</span></label>
        </div>
        <div class="group" id="window-group">
          <span class="caption">Period</span>
          <label><input type="radio" name="window" value="lastWeek" /><span>Week</span></label>
          <label><input type="radio" name="window" value="lastMonth" /><span>Month</span></label>
          <label><input type="radio" name="window" value="lastThreeMonths" /><span>3 months</span></label>
          <label><input type="radio" name="window" value="lastSixMonths" /><span>6 months</span></label>
          <label><input type="radio" name="window" value="lastYear" /><span>Year</span></label>
          <label><input type="radio" name="window" value="lastTwoYears" /><span>2 years</span></label>
          <label><input type="radio" name="window" value="allTime" checked /><span>All time</span></label>
        </div>
      </div>
      <div id="chart"></div>
      <div class="legend">
        <span><i class="swatch" style="background: var(--spring)"></i>Spring</span>
        <span><i class="swatch" style="background: var(--summer)"></i>Summer</span>
        <span><i class="swatch" style="background: var(--fall)"></i>Fall</span>
        <span><i class="swatch" style="background: var(--winter)"></i>Winter</span>
        <span><i class="swatch" style="background: var(--rest)"></i>Rest</span>
      </div>
    </section>

    <section class="card">
      <form class="log" id="log-form" method="post" action="/ticks/add">
        <input type="date" name="date" value="{{TODAY}}" required />
        <input type="text" name="discipline" placeholder="discipline (sport, boulder, trad...)" />
        <button type="submit">Log tick</button>
      </form>
      <div class="status" id="status"></div>
    </section>
  </main>

  <script>
    const SVG_NS = 'http://www.w3.org/2000/svg';
    const chart = document.getElementById('chart');
    const statusEl = document.getElementById('status');

    const selected = (name) => document.querySelector(`input[name="${name}"]:checked`).value;

    const setStatus = (text) => {
      statusEl.textContent = text;
    };

    const el = (tag, attrs, text) => {
      const node = document.createElementNS(SVG_NS, tag);
      Object.entries(attrs).forEach(([key, value]) => node.setAttribute(key, value));
      if (text !== undefined) {
        node.textContent = text;
      }
      return node;
    };

    const renderChart = (months) => {
      chart.innerHTML = '';
      if (months.length === 0) {
        chart.innerHTML = '<div class="empty">No climbing days in this period.</div>';
        return;
      }

      const width = 900;
      const height = 320;
      const pad = { top: 12, right: 12, bottom: 48, left: 36 };
      const plotW = width - pad.left - pad.right;
      const plotH = height - pad.top - pad.bottom;
      const slot = plotW / months.length;
      const barW = Math.max(4, slot * 0.7);
      const y = (days) => pad.top + plotH - (days / 7) * plotH;

      const svg = el('svg', { viewBox: `0 0 ${width} ${height}`, role: 'img' });

      for (let tick = 0; tick <= 7; tick++) {
        svg.appendChild(el('line', {
          x1: pad.left, x2: width - pad.right, y1: y(tick), y2: y(tick),
          stroke: '#ece8e1'
        }));
        svg.appendChild(el('text', {
          x: pad.left - 8, y: y(tick) + 4, 'text-anchor': 'end', 'font-size': 11, fill: '#6f6a63'
        }, String(tick)));
      }

      const labelEvery = Math.ceil(months.length / 12);
      months.forEach((month, idx) => {
        const x = pad.left + idx * slot + (slot - barW) / 2;
        const climbTop = y(month.climbing_days_per_week);

        const climb = el('rect', {
          x, width: barW, y: climbTop, height: pad.top + plotH - climbTop,
          fill: `var(--${month.season_name})`
        });
        climb.appendChild(el('title', {},
          `${month.label} (${month.season}): ${month.active_days} days, ` +
          `${month.climbing_days_per_week.toFixed(2)} per week`));
        svg.appendChild(climb);

        const rest = el('rect', {
          x, width: barW, y: y(7), height: climbTop - y(7), fill: 'var(--rest)'
        });
        rest.appendChild(el('title', {},
          `${month.label}: ${month.rest_days_per_week.toFixed(2)} rest days per week`));
        svg.appendChild(rest);

        if (idx % labelEvery === 0) {
          svg.appendChild(el('text', {
            x: x + barW / 2, y: height - pad.bottom + 18, 'text-anchor': 'middle',
            'font-size': 11, fill: '#6f6a63'
          }, month.label));
        }
      });

      chart.appendChild(svg);
    };

    const loadDisciplines = async () => {
      const res = await fetch('/api/disciplines');
      if (!res.ok) {
        throw new Error('Failed to load disciplines');
      }
      const group = document.getElementById('discipline-group');
      const current = selected('discipline');
      group.querySelectorAll('label.dynamic').forEach((node) => node.remove());
      (await res.json()).forEach((entry) => {
        const label = document.createElement('label');
        label.className = 'dynamic';
        const input = document.createElement('input');
        input.type = 'radio';
        input.name = 'discipline';
        input.value = entry.discipline;
        input.checked = entry.discipline === current;
        const span = document.createElement('span');
        span.textContent = `${entry.discipline} (${entry.ticks})`;
        label.append(input, span);
        group.appendChild(label);
      });
      if (!document.querySelector('input[name="discipline"]:checked')) {
        group.querySelector('input[value="all"]').checked = true;
      }
    };

    const loadActivity = async () => {
      const params = new URLSearchParams({
        discipline: selected('discipline'),
        window: selected('window')
      });
      const res = await fetch(`/api/activity?${params}`);
      if (!res.ok) {
        throw new Error(await res.text() || 'Failed to load activity');
      }
      renderChart((await res.json()).months);
    };

    document.querySelector('.controls').addEventListener('change', () => {
      loadActivity().catch((err) => setStatus(err.message));
    });

    document.getElementById('log-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const data = new FormData(event.target);
      setStatus('Saving...');
      const res = await fetch('/api/ticks', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({ date: data.get('date'), discipline: data.get('discipline') || null })
      });
      if (!res.ok) {
        setStatus(await res.text() || 'Request failed');
        return;
      }
      const body = await res.json();
      document.getElementById('total').textContent = body.total_ticks;
      setStatus('Saved');
      await loadDisciplines();
      await loadActivity();
    });

    loadDisciplines()
      .then(loadActivity)
      .catch((err) => setStatus(err.message));
  </script>
</body>
</html>
"#;
