use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Viaje (paquete turístico) tal como lo devuelve la API
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Viaje {
    pub id_viaje: i64,
    pub paquete: String,
    pub destino: String,
    /// El servidor puede mandar número o string; se guarda el texto tal cual
    #[serde(deserialize_with = "number_or_string")]
    pub precio: String,
}

/// Cuerpo de POST/PUT (el id viaja en la ruta, nunca en el body)
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ViajePayload {
    pub paquete: String,
    pub destino: String,
    pub precio: String,
}

/// Respuesta de POST/PUT/DELETE
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

/// Modo del formulario según el campo id
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// Valores crudos del formulario #form-viaje
#[derive(Clone, PartialEq, Default, Debug)]
pub struct ViajeForm {
    pub id_viaje: String,
    pub paquete: String,
    pub destino: String,
    pub precio: String,
}

impl ViajeForm {
    /// Formulario precargado con un viaje (modo edición)
    pub fn from_viaje(viaje: &Viaje) -> Self {
        Self {
            id_viaje: viaje.id_viaje.to_string(),
            paquete: viaje.paquete.clone(),
            destino: viaje.destino.clone(),
            precio: viaje.precio.clone(),
        }
    }

    /// Id vacío → Create, id entero → Edit
    pub fn mode(&self) -> Result<FormMode, ValidationError> {
        let id = self.id_viaje.trim();
        if id.is_empty() {
            return Ok(FormMode::Create);
        }
        id.parse::<i64>()
            .map(FormMode::Edit)
            .map_err(|_| ValidationError::InvalidId(id.to_string()))
    }

    /// Validar y construir el payload. Un valor con solo espacios cuenta como vacío.
    pub fn validate(&self) -> Result<(FormMode, ViajePayload), ValidationError> {
        let paquete = self.paquete.trim();
        let destino = self.destino.trim();
        let precio = self.precio.trim();

        let missing: Vec<&'static str> = [("paquete", paquete), ("destino", destino), ("precio", precio)]
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let mode = self.mode()?;
        Ok((
            mode,
            ViajePayload {
                paquete: paquete.to_string(),
                destino: destino.to_string(),
                precio: precio.to_string(),
            },
        ))
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(serde_json::Number),
        Text(String),
    }

    Ok(match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => format_number(&n),
        NumberOrString::Text(s) => s,
    })
}

/// Formatear como lo haría `Number#toString` en el navegador: un float entero
/// (`500.0`) se muestra sin decimales hasta 1e21, donde pasa a exponente.
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", f)
            }
        }
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, paquete: &str, destino: &str, precio: &str) -> ViajeForm {
        ViajeForm {
            id_viaje: id.to_string(),
            paquete: paquete.to_string(),
            destino: destino.to_string(),
            precio: precio.to_string(),
        }
    }

    #[test]
    fn precio_accepts_numbers_and_strings() {
        let json = r#"[
            {"id_viaje": 1, "paquete": "Basico", "destino": "Cancun", "precio": "500"},
            {"id_viaje": 2, "paquete": "Premium", "destino": "Bariloche", "precio": 1250.5},
            {"id_viaje": 3, "paquete": "Familiar", "destino": "Mendoza", "precio": 800},
            {"id_viaje": 4, "paquete": "Express", "destino": "Salta", "precio": 500.0},
            {"id_viaje": 5, "paquete": "Gratis", "destino": "Lujan", "precio": -0.0},
            {"id_viaje": 6, "paquete": "Lujo", "destino": "Marte", "precio": 1e21}
        ]"#;
        let viajes: Vec<Viaje> = serde_json::from_str(json).unwrap();
        let precios: Vec<&str> = viajes.iter().map(|v| v.precio.as_str()).collect();
        assert_eq!(precios, vec!["500", "1250.5", "800", "500", "0", "1e+21"]);
    }

    #[test]
    fn payload_has_no_id() {
        let payload = ViajePayload {
            paquete: "Basico".into(),
            destino: "Cancun".into(),
            precio: "500".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"paquete": "Basico", "destino": "Cancun", "precio": "500"})
        );
    }

    #[test]
    fn empty_id_means_create() {
        let (mode, payload) = form("", "Basico", "Cancun", "500").validate().unwrap();
        assert_eq!(mode, FormMode::Create);
        assert_eq!(payload.paquete, "Basico");
    }

    #[test]
    fn numeric_id_means_edit() {
        let (mode, _) = form(" 7 ", "Basico", "Cancun", "500").validate().unwrap();
        assert_eq!(mode, FormMode::Edit(7));
    }

    #[test]
    fn each_missing_field_is_reported() {
        assert_eq!(
            form("", "", "Cancun", "500").validate(),
            Err(ValidationError::MissingFields(vec!["paquete"]))
        );
        assert_eq!(
            form("", "Basico", "", "500").validate(),
            Err(ValidationError::MissingFields(vec!["destino"]))
        );
        assert_eq!(
            form("3", "Basico", "Cancun", "").validate(),
            Err(ValidationError::MissingFields(vec!["precio"]))
        );
        assert_eq!(
            form("", "  ", "", "\t").validate(),
            Err(ValidationError::MissingFields(vec!["paquete", "destino", "precio"]))
        );
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        assert_eq!(
            form("abc", "Basico", "Cancun", "500").validate(),
            Err(ValidationError::InvalidId("abc".to_string()))
        );
    }

    #[test]
    fn values_are_trimmed() {
        let (_, payload) = form("", "  Basico ", "Cancun\n", " 500").validate().unwrap();
        assert_eq!(payload.paquete, "Basico");
        assert_eq!(payload.destino, "Cancun");
        assert_eq!(payload.precio, "500");
    }

    #[test]
    fn form_from_viaje_round_trips_mode() {
        let viaje = Viaje {
            id_viaje: 1,
            paquete: "P".into(),
            destino: "D".into(),
            precio: "10".into(),
        };
        let form = ViajeForm::from_viaje(&viaje);
        assert_eq!(form.id_viaje, "1");
        assert_eq!(form.mode(), Ok(FormMode::Edit(1)));
    }
}
