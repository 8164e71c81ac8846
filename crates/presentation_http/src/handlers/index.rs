//! Landing page listing API capabilities

use axum::response::Html;
use domain::CityRegistry;

/// Render the capability listing with the supported city names
pub async fn index() -> Html<String> {
    let cities: Vec<&str> = CityRegistry::names().collect();

    Html(format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
             <title>AeroSense - Air Quality API</title>\n\
         </head>\n\
         <body>\n\
             <h1>AeroSense Air Quality API - Real-time Data</h1>\n\
             <p>Available endpoints:</p>\n\
             <ul>\n\
                 <li>GET /api/cities - Get all {count} cities data (Ambee API)</li>\n\
                 <li>GET /api/city/&lt;city_name&gt; - Get specific city data</li>\n\
                 <li>GET /api/forecast/&lt;city_name&gt; - Get 7-day forecast</li>\n\
                 <li>GET /api/hourly/&lt;city_name&gt;/&lt;date&gt; - Get 24-hour data</li>\n\
                 <li>POST /api/predict-aqi - AQI with health advice</li>\n\
                 <li>POST /api/calculate-aqi - Calculate AQI from pollutants</li>\n\
                 <li>POST /api/chatbot - AI Chatbot for AQI queries</li>\n\
             </ul>\n\
             <h2>Supported Cities ({count}):</h2>\n\
             <p>{cities}</p>\n\
         </body>\n\
         </html>",
        count = CityRegistry::LEN,
        cities = cities.join(", ")
    ))
}
