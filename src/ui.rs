use crate::summary::DaySummary;
use crate::table::{LogRow, LogSnapshot};
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub fn render_index(snapshot: &LogSnapshot, summary: &DaySummary, error: Option<&str>) -> String {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Food Log" }
                style { (PreEscaped(CSS)) }
            }
            body {
                main.app {
                    header {
                        h1 { "Food Log" }
                        p.subtitle {
                            "Entries for " span id="log-date" { (summary.date) }
                            ". Calories are given per 100 units."
                        }
                    }

                    (render_summary(summary))

                    form id="entry-form" method="post" action="/entries" {
                        label {
                            span.label { "Food" }
                            input id="food" name="food" type="text" autocomplete="off";
                        }
                        label {
                            span.label { "Amount" }
                            input id="amount" name="amount" type="text" inputmode="decimal";
                        }
                        label {
                            span.label { "kcal / 100" }
                            input id="kcal_per_unit" name="kcal_per_unit" type="text" inputmode="decimal";
                        }
                        input.btn-add type="submit" value="Add";
                    }

                    div.status id="status" data-type=(if error.is_some() { "error" } else { "" }) {
                        @if let Some(message) = error {
                            (message)
                        }
                    }

                    section.log.hidden[snapshot.hidden] id="food-log" {
                        table {
                            thead {
                                tr {
                                    th { "#" }
                                    th { "Food" }
                                    th { "Amount" }
                                    th { "kcal" }
                                    th {}
                                    th {}
                                }
                            }
                            tbody id="put-rows" {
                                @for row in &snapshot.rows {
                                    (render_row(row))
                                }
                            }
                            tfoot {
                                tr {
                                    td {}
                                    td { "Total" }
                                    td id="total-amount" { (snapshot.total_amount) }
                                    td id="total-calories" { (format_kcal(snapshot.total_centikcal)) }
                                    td {}
                                    td {}
                                }
                            }
                        }
                    }
                    p.hint.empty-hint { "Nothing logged yet." }
                }
                script { (PreEscaped(SCRIPT)) }
            }
        }
    }
    .into_string()
}

fn render_summary(summary: &DaySummary) -> Markup {
    html! {
        section.panel id="budget" {
            div.stat {
                span.label { "Calories" }
                span.value id="summary-kcal" { (format_decimal(summary.total_kcal)) }
            }
            div.stat {
                span.label { "Limit" }
                span.value id="summary-limit" { (format_optional(summary.calorie_limit)) }
            }
            div.stat {
                span.label { "Need" }
                span.value id="summary-need" { (format_optional(summary.calorie_need)) }
            }
            div.stat {
                span.label { "Remaining" }
                span.value.net.over[summary.over_limit] id="summary-remaining" {
                    @match summary.remaining {
                        Some(remaining) => { (format_decimal(remaining)) }
                        None => { "--" }
                    }
                }
            }
        }
    }
}

fn render_row(row: &LogRow) -> Markup {
    html! {
        tr data-id=(row.id.0) {
            td.rank { (row.rank) }
            td { (row.food) }
            td { (row.amount) }
            td { (format_kcal(row.centikcal)) }
            td {
                button.edit type="button" title="Editing is not available yet" disabled { "E" }
            }
            td {
                form.delete-form method="post" action={ "/entries/" (row.id.0) "/delete" } {
                    button.delete type="submit" data-id=(row.id.0) { "X" }
                }
            }
        }
    }
}

/// Renders hundredths of a kcal without trailing zeros: `260`, `77.5`, `0.42`.
pub fn format_kcal(centikcal: u64) -> String {
    let whole = centikcal / 100;
    let frac = centikcal % 100;
    if frac == 0 {
        whole.to_string()
    } else if frac % 10 == 0 {
        format!("{whole}.{}", frac / 10)
    } else {
        format!("{whole}.{frac:02}")
    }
}

fn format_decimal(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        let text = format!("{rounded:.2}");
        text.trim_end_matches('0').to_string()
    }
}

fn format_optional(value: Option<u64>) -> String {
    value.map_or_else(|| "--".to_string(), |value| value.to_string())
}

const CSS: &str = r#"
    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(860px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 24px;
    }

    h1 {
      font-family: "Georgia", serif;
      margin: 0;
    }

    .subtitle,
    .hint {
      margin: 0;
      color: #5f5c57;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .value.over {
      color: #c63b2b;
    }

    #entry-form {
      display: grid;
      grid-template-columns: 2fr 1fr 1fr auto;
      gap: 12px;
      align-items: end;
    }

    #entry-form label {
      display: grid;
      gap: 6px;
    }

    input[type="text"] {
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    .btn-add,
    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font-weight: 600;
      cursor: pointer;
    }

    .btn-add {
      background: var(--accent);
      color: white;
    }

    button.delete {
      background: var(--accent-2);
      color: white;
    }

    button.edit[disabled] {
      opacity: 0.4;
      cursor: not-allowed;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th,
    td {
      padding: 8px 10px;
      text-align: left;
      border-bottom: 1px solid rgba(47, 72, 88, 0.08);
    }

    tfoot td {
      font-weight: 600;
    }

    .delete-form {
      margin: 0;
    }

    .hidden {
      display: none;
    }

    .empty-hint {
      display: none;
    }

    #food-log.hidden + .empty-hint {
      display: block;
    }

    .status {
      min-height: 1.2em;
      color: #6b645d;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 600px) {
      #entry-form {
        grid-template-columns: 1fr;
      }
    }
"#;

const SCRIPT: &str = r#"
    const form = document.getElementById('entry-form');
    const foodLog = document.getElementById('food-log');
    const rowsEl = document.getElementById('put-rows');
    const totalAmountEl = document.getElementById('total-amount');
    const totalCaloriesEl = document.getElementById('total-calories');
    const statusEl = document.getElementById('status');
    const summaryKcalEl = document.getElementById('summary-kcal');
    const summaryRemainingEl = document.getElementById('summary-remaining');

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const formatNumber = (value) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      return String(Math.round(value * 100) / 100);
    };

    const cell = (text, className) => {
      const td = document.createElement('td');
      if (className) {
        td.className = className;
      }
      td.textContent = text;
      return td;
    };

    const buildRow = (row) => {
      const tr = document.createElement('tr');
      tr.dataset.id = row.id;
      tr.append(cell(row.rank, 'rank'), cell(row.food), cell(row.amount), cell(formatNumber(row.kcal)));

      const edit = document.createElement('button');
      edit.type = 'button';
      edit.className = 'edit';
      edit.disabled = true;
      edit.title = 'Editing is not available yet';
      edit.textContent = 'E';
      const editCell = document.createElement('td');
      editCell.append(edit);

      const del = document.createElement('button');
      del.type = 'submit';
      del.className = 'delete';
      del.dataset.id = row.id;
      del.textContent = 'X';
      const delForm = document.createElement('form');
      delForm.className = 'delete-form';
      delForm.method = 'post';
      delForm.action = `/entries/${row.id}/delete`;
      delForm.append(del);
      const delCell = document.createElement('td');
      delCell.append(delForm);

      tr.append(editCell, delCell);
      return tr;
    };

    const render = (data) => {
      rowsEl.replaceChildren(...data.rows.map(buildRow));
      totalAmountEl.textContent = data.total_amount;
      totalCaloriesEl.textContent = formatNumber(data.total_calories);
      foodLog.classList.toggle('hidden', data.hidden);
      summaryKcalEl.textContent = formatNumber(data.summary.total_kcal);
      summaryRemainingEl.textContent = data.summary.remaining === null ? '--' : formatNumber(data.summary.remaining);
      summaryRemainingEl.classList.toggle('over', data.summary.over_limit);
    };

    const send = async (url, options) => {
      const res = await fetch(url, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      render(await res.json());
    };

    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const payload = {
        food: form.elements.food.value,
        amount: form.elements.amount.value,
        kcal_per_unit: form.elements.kcal_per_unit.value
      };
      send('/api/entries', {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(payload)
      })
        .then(() => {
          form.reset();
          setStatus('', '');
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    foodLog.addEventListener('click', (event) => {
      const button = event.target.closest('.delete');
      if (!button) {
        return;
      }
      event.preventDefault();
      send(`/api/entries/${button.dataset.id}`, { method: 'DELETE' })
        .catch((err) => setStatus(err.message, 'error'));
    });
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{build_summary_at, Budget};
    use crate::table::FoodLog;
    use chrono::NaiveDate;

    fn page(log: &FoodLog, error: Option<&str>) -> String {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let summary = build_summary_at(date, log, Budget::default());
        render_index(&log.snapshot(), &summary, error)
    }

    #[test]
    fn format_kcal_trims_trailing_zeros() {
        assert_eq!(format_kcal(26_000), "260");
        assert_eq!(format_kcal(7_750), "77.5");
        assert_eq!(format_kcal(42), "0.42");
        assert_eq!(format_kcal(105), "1.05");
        assert_eq!(format_kcal(0), "0");
    }

    #[test]
    fn empty_log_hides_table() {
        let html = page(&FoodLog::new(), None);
        assert!(html.contains(r#"class="log hidden""#));
        assert!(html.contains(r#"<td id="total-amount">0</td>"#));
    }

    #[test]
    fn rows_render_six_cells_in_order() {
        let mut log = FoodLog::new();
        log.submit_entry("egg", "50", "155").unwrap();
        log.submit_entry("milk", "100", "42").unwrap();
        let html = page(&log, None);

        assert!(html.contains(r#"class="log""#));
        assert!(html.contains(r#"<td class="rank">1</td><td>egg</td><td>50</td><td>77.5</td>"#));
        assert!(html.contains(r#"<td class="rank">2</td><td>milk</td><td>100</td><td>42</td>"#));
        assert!(html.contains(r#"<td id="total-amount">150</td>"#));
        assert!(html.contains(r#"<td id="total-calories">119.5</td>"#));
        assert!(html.contains(r#"action="/entries/1/delete""#));
        assert!(html.contains(r#"class="edit""#));
    }

    #[test]
    fn page_carries_element_ids_used_by_script() {
        let html = page(&FoodLog::new(), None);
        for id in [
            "log-date",
            "entry-form",
            "food",
            "amount",
            "kcal_per_unit",
            "status",
            "food-log",
            "put-rows",
            "total-amount",
            "total-calories",
            "budget",
            "summary-kcal",
            "summary-limit",
            "summary-need",
            "summary-remaining",
        ] {
            assert!(html.contains(&format!(r#"id="{id}""#)), "missing id {id}");
        }
    }

    #[test]
    fn food_names_are_escaped() {
        let mut log = FoodLog::new();
        log.submit_entry("<script>alert(1)</script>", "1", "1").unwrap();
        let html = page(&log, None);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }

    #[test]
    fn error_message_is_shown() {
        let html = page(&FoodLog::new(), Some("amount is required"));
        assert!(html.contains(r#"data-type="error""#));
        assert!(html.contains("amount is required"));
    }
}
