//! Default dashboard synthesis and display-name generation.

use crate::layout::unsanitize_input_value;

/// Dashboard id of the default dashboard every user starts with.
pub const DEFAULT_DASHBOARD_ID: i64 = 1;

/// Reserved login owning the system-wide default layout row.
pub const DEFAULT_LAYOUT_LOGIN: &str = "";

/// The hardcoded starter layout for users who never customized dashboard 1.
///
/// Three columns of stock analytics widgets. The first slot depends on the
/// caller's privilege level: super users see the donation-form widget,
/// everyone else the promo video.
pub fn default_layout_template(super_user: bool) -> String {
    let top_widget = if super_user {
        r#"{"uniqueId":"widgetHomeDonationForm","parameters":{"module":"Home","action":"donationForm"}},"#
    } else {
        r#"{"uniqueId":"widgetHomePromoVideo","parameters":{"module":"Home","action":"promoVideo"}},"#
    };

    format!(
        r#"[
    [
        {top_widget}
        {{"uniqueId":"widgetVisitsSummaryEvolutionGraph","parameters":{{"module":"VisitsSummary","action":"evolutionGraph","viewDataTable":"graphEvolution"}}}},
        {{"uniqueId":"widgetLiveVisitorLog","parameters":{{"module":"Live","action":"visitorLog"}}}}
    ],
    [
        {{"uniqueId":"widgetReferrersTopWebsites","parameters":{{"module":"Referrers","action":"topWebsites"}}}},
        {{"uniqueId":"widgetVisitTimeServerTime","parameters":{{"module":"VisitTime","action":"serverTime","viewDataTable":"graphVerticalBar"}}}}
    ],
    [
        {{"uniqueId":"widgetGeoVisitorMap","parameters":{{"module":"Geo","action":"visitorMap"}}}},
        {{"uniqueId":"widgetDevicesBrowsers","parameters":{{"module":"Devices","action":"browsers"}}}},
        {{"uniqueId":"widgetReferrersSearchEngines","parameters":{{"module":"Referrers","action":"searchEngines"}}}}
    ]
]"#
    )
}

/// Compute display names for a user's dashboards.
///
/// `stored` holds the raw `name` column for each dashboard, in listing
/// order. Unnamed dashboards get "Dashboard of {login}"; the second and
/// later unnamed entries get a numeric suffix (counting unnamed entries
/// only). Stored names are passed through [`unsanitize_input_value`] to
/// reverse input-sanitizer encoding.
pub fn assign_dashboard_names(stored: &[Option<String>], login: &str) -> Vec<String> {
    let mut nameless = 0usize;

    stored
        .iter()
        .map(|name| match name.as_deref().filter(|n| !n.is_empty()) {
            Some(name) => unsanitize_input_value(name),
            None => {
                nameless += 1;
                if nameless > 1 {
                    format!("Dashboard of {login} ({nameless})")
                } else {
                    format!("Dashboard of {login}")
                }
            }
        })
        .collect()
}
