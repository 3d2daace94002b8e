use serde::Serialize;
use std::str::FromStr;

use super::GeoPosition;

/// Campo de texto del formulario, identificado por el atributo `name` del input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Whatsapp,
}

impl FormField {
    pub fn input_name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Whatsapp => "whatsapp",
        }
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "whatsapp" => Ok(FormField::Whatsapp),
            other => Err(format!("Campo desconocido: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
}

impl FormFields {
    /// Copia con un único campo reemplazado
    pub fn with_field(&self, field: FormField, value: String) -> Self {
        let mut next = self.clone();
        match field {
            FormField::Name => next.name = value,
            FormField::Email => next.email = value,
            FormField::Whatsapp => next.whatsapp = value,
        }
        next
    }
}

/// Ids de items seleccionados, en orden de selección y sin duplicados
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectedItems(Vec<u32>);

impl SelectedItems {
    /// Quita el id si ya estaba, si no lo añade al final
    pub fn toggle(&mut self, id: u32) {
        match self.0.iter().position(|selected| *selected == id) {
            Some(index) => {
                self.0.remove(index);
            }
            None => self.0.push(id),
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.0
    }
}

/// Body de `POST /points`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionPayload {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub uf: String,
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub items: Vec<u32>,
}

impl SubmissionPayload {
    pub fn new(
        fields: &FormFields,
        uf: &str,
        city: &str,
        position: GeoPosition,
        items: &SelectedItems,
    ) -> Self {
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            whatsapp: fields.whatsapp.clone(),
            uf: uf.to_string(),
            city: city.to_string(),
            latitude: position.latitude,
            longitude: position.longitude,
            items: items.ids().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn form_field_parses_input_names() {
        for field in [FormField::Name, FormField::Email, FormField::Whatsapp] {
            assert_eq!(field.input_name().parse::<FormField>(), Ok(field));
        }
        assert!("telefone".parse::<FormField>().is_err());
    }

    #[test]
    fn with_field_keeps_other_fields() {
        let fields = FormFields::default()
            .with_field(FormField::Name, "Ana".into())
            .with_field(FormField::Email, "ana@ecoleta.com".into());
        let updated = fields.with_field(FormField::Whatsapp, "11999990000".into());

        assert_eq!(fields.whatsapp, "");
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, "ana@ecoleta.com");
        assert_eq!(updated.whatsapp, "11999990000");
    }

    #[test]
    fn toggle_keeps_ids_clicked_an_odd_number_of_times() {
        let clicks = [4, 1, 4, 2, 1, 1, 6, 2, 4, 4, 4];
        let mut selected = SelectedItems::default();
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for id in clicks {
            selected.toggle(id);
            *counts.entry(id).or_default() += 1;
        }

        let mut expected: Vec<u32> = counts
            .into_iter()
            .filter(|(_, count)| count % 2 == 1)
            .map(|(id, _)| id)
            .collect();
        expected.sort();
        let mut actual = selected.ids().to_vec();
        actual.sort();
        actual.dedup();

        assert_eq!(actual.len(), selected.ids().len());
        assert_eq!(actual, expected);
    }

    #[test]
    fn toggle_appends_in_click_order() {
        let mut selected = SelectedItems::default();
        selected.toggle(5);
        selected.toggle(2);
        selected.toggle(9);
        selected.toggle(2);
        assert_eq!(selected.ids(), &[5, 9]);
        assert!(!selected.contains(2));
    }

    #[test]
    fn payload_serializes_with_backend_field_names() {
        let fields = FormFields::default().with_field(FormField::Name, "Ana".into());
        let mut items = SelectedItems::default();
        items.toggle(3);
        let payload = SubmissionPayload::new(
            &fields,
            "SP",
            "Campinas",
            GeoPosition::new(-23.5, -46.6),
            &items,
        );

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "name": "Ana",
                "email": "",
                "whatsapp": "",
                "uf": "SP",
                "city": "Campinas",
                "latitude": -23.5,
                "longitude": -46.6,
                "items": [3]
            })
        );
    }
}
