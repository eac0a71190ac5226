//! The self-contained map document.
//!
//! The emitted HTML loads Leaflet from a CDN, embeds the layer payloads
//! as JSON, and wires up the choropleth, the marker overlays, and a
//! layer control. It is a static artifact: opening it in a browser is
//! the "rendered map."

use crate::{
    MAP_CENTER, MAP_HEIGHT_PX, MAP_WIDTH_PX, MAP_ZOOM, MARKER_FILL_OPACITY, MARKER_RADIUS_PX,
};

const TEMPLATE: &str = r##"<!doctype html>
<html lang="es">

<head>
  <meta charset="utf-8" />
  <title>Mapa de Denuncias CDMX</title>

  <!-- Leaflet 1.9.4 -->
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css" crossorigin="anonymous"
    referrerpolicy="no-referrer" />
  <script src="https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js" crossorigin="anonymous"
    referrerpolicy="no-referrer"></script>

  <style>
    body {
      margin: 0;
      font-family: sans-serif;
      background: #f8f9fa;
    }

    h1 {
      font-size: 1.25rem;
      margin: 0.75rem 1rem 0.25rem;
    }

    p.subtitle {
      margin: 0 1rem 0.75rem;
      color: #555;
    }

    #map {
      width: @WIDTH@px;
      height: @HEIGHT@px;
      margin: 0 1rem 1rem;
      border: 1px solid #ddd;
    }
  </style>
</head>

<body>
  <h1>Mapa de Denuncias CDMX</h1>
  <p class="subtitle">Filtros por año, delito, franja horaria y grupo poblacional</p>
  <div id="map"></div>

  <script>
    const alcaldias = @ALCALDIAS@;
    const markerLayers = @MARKER_LAYERS@;

    const map = L.map('map').setView([@CENTER_LAT@, @CENTER_LNG@], @ZOOM@);

    L.tileLayer('https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png', {
      attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors &copy; <a href="https://carto.com/attributions">CARTO</a>',
      subdomains: 'abcd',
      maxZoom: 20
    }).addTo(map);

    const overlays = {};

    const boundaries = L.geoJSON(alcaldias, {
      style: feature => ({
        fillColor: feature.properties.fillColor || '#cccccc',
        color: 'black',
        weight: 1,
        fillOpacity: 0.6
      }),
      onEachFeature: (feature, layer) => {
        layer.bindTooltip(
          `Alcaldía: ${feature.properties.name}<br>Denuncias: ${feature.properties.denuncias}`,
          { sticky: true }
        );
      }
    }).addTo(map);
    overlays['Alcaldías'] = boundaries;

    for (const group of markerLayers) {
      const layer = L.featureGroup();
      for (const m of group.markers) {
        L.circleMarker([m.lat, m.lng], {
          radius: @MARKER_RADIUS@,
          color: group.color || 'gray',
          fill: true,
          fillOpacity: @MARKER_OPACITY@
        })
          .bindPopup(`Delito: ${m.delito}<br>Alcaldía: ${m.alcaldia}<br>Hora: ${m.hora}`)
          .addTo(layer);
      }
      layer.addTo(map);
      overlays[group.name] = layer;
    }

    L.control.layers(null, overlays).addTo(map);
  </script>
</body>

</html>
"##;

/// Renders the document from the two serialized layer payloads.
pub fn render(alcaldias_json: &str, marker_layers_json: &str) -> String {
    TEMPLATE
        .replace("@ALCALDIAS@", &embed(alcaldias_json))
        .replace("@MARKER_LAYERS@", &embed(marker_layers_json))
        .replace("@CENTER_LAT@", &MAP_CENTER.0.to_string())
        .replace("@CENTER_LNG@", &MAP_CENTER.1.to_string())
        .replace("@ZOOM@", &MAP_ZOOM.to_string())
        .replace("@WIDTH@", &MAP_WIDTH_PX.to_string())
        .replace("@HEIGHT@", &MAP_HEIGHT_PX.to_string())
        .replace("@MARKER_RADIUS@", &MARKER_RADIUS_PX.to_string())
        .replace("@MARKER_OPACITY@", &MARKER_FILL_OPACITY.to_string())
}

/// Makes a JSON payload safe to embed inside a `<script>` element: a
/// literal `</script>` inside a string value would otherwise terminate
/// the element early.
fn embed(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_payloads_and_fixed_parameters() {
        let html = render("{\"type\":\"FeatureCollection\",\"features\":[]}", "[]");
        assert!(html.contains("Mapa de Denuncias CDMX"));
        assert!(html.contains("const alcaldias = {\"type\":\"FeatureCollection\""));
        assert!(html.contains("const markerLayers = [];"));
        assert!(html.contains("setView([19.4326, -99.1332], 11)"));
        assert!(html.contains("width: 1000px"));
        assert!(html.contains("height: 700px"));
        assert!(html.contains("radius: 3,"));
        assert!(html.contains("fillOpacity: 0.5"));
    }

    #[test]
    fn escapes_script_terminators_in_payloads() {
        let html = render("{}", "[{\"delito\":\"</script>\"}]");
        assert!(!html.contains("\"</script>\""));
        assert!(html.contains("<\\/script>"));
    }

    #[test]
    fn leaves_no_placeholders_behind() {
        let html = render("{}", "[]");
        assert!(!html.contains('@'));
    }
}
