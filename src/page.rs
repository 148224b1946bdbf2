//! Standalone HTML page hosting the dashboard.
//!
//! The page embeds the serialized [`Dashboard`] and a small bootstrap script that
//! creates one chart per mount point and follows the legend `onClick` tags the
//! same way [`crate::view::ViewController`] does.

use crate::error::Result;
use crate::options::RenderOptions;
use crate::render::{
    CHART_TITLE_ID, COMPARISON_CHART_ID, DATA_CHART_ID, Dashboard, WEEKDAY_CHART_ID,
};

const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@2.9.4/dist/Chart.bundle.min.js";

const BOOTSTRAP: &str = r#"
(function () {
  var d = JSON.parse(document.getElementById('dashboard-data').textContent);
  var o = JSON.parse(document.getElementById('dashboard-options').textContent);
  function mount(id, cfg) {
    return new Chart(document.getElementById(id).getContext('2d'), cfg);
  }
  mount(o.ids.weekday, d.weekday_chart);
  mount(o.ids.comparison, d.comparison_chart);
  var title = document.getElementById(o.ids.title);
  var cfg = d.data_chart;
  var chart;
  // The bundle carries the handler as a tag; read it before the function replaces it.
  var action = cfg.options.legend.onClick;
  if (action === 'showStations' || action === 'showLocations') {
    cfg.options.legend.onClick = function (e, item) {
      if (action === 'showStations') {
        var i = item.datasetIndex;
        if (i >= d.station_data.length || i >= d.location_data.datasets.length) {
          console.error('invalid series index ' + i);
          return;
        }
        title.textContent = o.stationTitlePrefix + d.location_data.datasets[i].label;
        chart.config.data = d.station_data[i];
        action = 'showLocations';
      } else {
        title.textContent = o.locationTitle;
        chart.config.data = d.location_data;
        action = 'showStations';
      }
      chart.update();
    };
  } else {
    delete cfg.options.legend.onClick;
  }
  chart = mount(o.ids.data, cfg);
})();
"#;

/// Escape text for an HTML text node.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize for embedding inside `<script type="application/json">`.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render the full HTML document.
pub fn render_page(dashboard: &Dashboard, options: &RenderOptions) -> Result<String> {
    let page_options = serde_json::json!({
        "ids": {
            "weekday": WEEKDAY_CHART_ID,
            "comparison": COMPARISON_CHART_ID,
            "data": DATA_CHART_ID,
            "title": CHART_TITLE_ID,
        },
        "locationTitle": options.location_title,
        "stationTitlePrefix": options.station_title_prefix,
    });

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Activity Dashboard</title>\n");
    html.push_str(&format!("<script src=\"{CHART_JS}\"></script>\n"));
    html.push_str("<style>.chart{position:relative;height:360px}</style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!(
        "<h2 id=\"{CHART_TITLE_ID}\">{}</h2>\n",
        escape_html(&dashboard.chart_title)
    ));
    for id in [DATA_CHART_ID, WEEKDAY_CHART_ID, COMPARISON_CHART_ID] {
        html.push_str(&format!(
            "<div class=\"chart\"><canvas id=\"{id}\"></canvas></div>\n"
        ));
    }
    html.push_str(&format!(
        "<script id=\"dashboard-data\" type=\"application/json\">{}</script>\n",
        script_json(dashboard)?
    ));
    html.push_str(&format!(
        "<script id=\"dashboard-options\" type=\"application/json\">{}</script>\n",
        script_json(&page_options)?
    ));
    html.push_str("<script>");
    html.push_str(BOOTSTRAP);
    html.push_str("</script>\n</body>\n</html>\n");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_json_cannot_close_the_tag() {
        let s = script_json(&"</script><b>").unwrap();
        assert!(!s.contains("</script>"));
    }

    #[test]
    fn legend_dispatch_reads_the_serialized_tag() {
        let tag = BOOTSTRAP.find("var action = cfg.options.legend.onClick;").unwrap();
        let bind = BOOTSTRAP.find("cfg.options.legend.onClick = function").unwrap();
        assert!(tag < bind);
        assert!(!BOOTSTRAP.contains("legend.action"));
    }

    #[test]
    fn escapes_title() {
        assert_eq!(escape_html("A & <B>"), "A &amp; &lt;B&gt;");
    }
}
