use crate::domain::pricing::BindingType;

use super::value_objects::{
    BoxType, OrderForm, DEFAULT_PAPER_TYPE, MAX_CUSTOM_TEXT_LEN, MAX_INITIALS_LEN,
    MAX_SHEET_COUNT, MIN_SHEET_COUNT,
};

// ============================================================================
// Form Edits - Represent a single field change made by the customer
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Name,
    Phone,
    Address,
    City,
    State,
    Pincode,
    Country,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontPageField {
    FullNames,
    Initials,
    CoverImage,
    Date,
    CustomText,
}

impl FrontPageField {
    /// Longest value the field accepts, in characters
    pub fn max_len(&self) -> Option<usize> {
        match self {
            FrontPageField::Initials => Some(MAX_INITIALS_LEN),
            FrontPageField::CustomText => Some(MAX_CUSTOM_TEXT_LEN),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEdit {
    SetTitle(String),
    SelectBinding(BindingType),
    SelectPaper(String),
    /// Raw number entry; stored as typed
    SetSheetCount(u32),
    IncrementSheets,
    DecrementSheets,
    SetAdditionalPaper(String),
    SelectSize(String),
    SelectColor(String),
    SelectBox(BoxType),
    SetBagType(String),
    SetCalendarType(String),
    SetAcrylicCalendar(bool),
    SetReplicaEbook(bool),
    SetImageLink(String),
    SetQuantity(u32),
    SetLogo(String),
    SetAddress(AddressField, String),
    SetFrontPage(FrontPageField, String),
}

impl OrderForm {
    /// Produce the form that results from one edit, leaving `self` untouched
    pub fn apply(&self, edit: FormEdit) -> OrderForm {
        let mut next = self.clone();

        match edit {
            FormEdit::SetTitle(title) => next.title = title,
            FormEdit::SelectBinding(binding) => {
                next.binding_type = Some(binding);
                if binding == BindingType::Nt {
                    next.paper_type = DEFAULT_PAPER_TYPE.to_string();
                }
            }
            FormEdit::SelectPaper(paper) => next.paper_type = paper,
            FormEdit::SetSheetCount(count) => next.sheet_count = count,
            FormEdit::IncrementSheets => {
                next.sheet_count = next.sheet_count.saturating_add(1).min(MAX_SHEET_COUNT);
            }
            FormEdit::DecrementSheets => {
                next.sheet_count = next.sheet_count.saturating_sub(1).max(MIN_SHEET_COUNT);
            }
            FormEdit::SetAdditionalPaper(value) => next.additional_paper = value,
            FormEdit::SelectSize(size) => next.size = size,
            FormEdit::SelectColor(color) => next.album_color = color,
            FormEdit::SelectBox(box_type) => next.box_type = Some(box_type),
            FormEdit::SetBagType(value) => next.bag_type = value,
            FormEdit::SetCalendarType(value) => next.calendar_type = value,
            FormEdit::SetAcrylicCalendar(checked) => next.acrylic_calendar = checked,
            FormEdit::SetReplicaEbook(checked) => next.replica_ebook = checked,
            FormEdit::SetImageLink(link) => next.image_link = link,
            FormEdit::SetQuantity(quantity) => next.quantity = quantity,
            FormEdit::SetLogo(logo) => next.logo = logo,
            FormEdit::SetAddress(field, value) => {
                let address = &mut next.delivery_address;
                let slot = match field {
                    AddressField::Name => &mut address.name,
                    AddressField::Phone => &mut address.phone,
                    AddressField::Address => &mut address.address,
                    AddressField::City => &mut address.city,
                    AddressField::State => &mut address.state,
                    AddressField::Pincode => &mut address.pincode,
                    AddressField::Country => &mut address.country,
                };
                *slot = value;
            }
            FormEdit::SetFrontPage(field, value) => {
                let value = match field.max_len() {
                    Some(limit) => value.chars().take(limit).collect(),
                    None => value,
                };

                let front_page = &mut next.front_page_customization;
                let slot = match field {
                    FrontPageField::FullNames => &mut front_page.full_names,
                    FrontPageField::Initials => &mut front_page.initials,
                    FrontPageField::CoverImage => &mut front_page.cover_image,
                    FrontPageField::Date => &mut front_page.date,
                    FrontPageField::CustomText => &mut front_page.custom_text,
                };
                *slot = value;
            }
        }

        next
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_leaves_original_untouched() {
        let form = OrderForm::default();
        let edited = form.apply(FormEdit::SetTitle("Romeo & Juliet".to_string()));

        assert_eq!(form.title, "");
        assert_eq!(edited.title, "Romeo & Juliet");
    }

    #[test]
    fn test_selecting_nt_restores_default_paper() {
        let form = OrderForm::default()
            .apply(FormEdit::SelectPaper("Matte".to_string()))
            .apply(FormEdit::SelectBinding(BindingType::Nt));

        assert_eq!(form.paper_type, "Glossy");
    }

    #[test]
    fn test_selecting_layflat_keeps_paper() {
        let form = OrderForm::default()
            .apply(FormEdit::SelectPaper("Matte".to_string()))
            .apply(FormEdit::SelectBinding(BindingType::Layflat));

        assert_eq!(form.binding_type, Some(BindingType::Layflat));
        assert_eq!(form.paper_type, "Matte");
    }

    #[test]
    fn test_sheet_buttons_clamp_to_range() {
        let at_min = OrderForm::default().apply(FormEdit::DecrementSheets);
        assert_eq!(at_min.sheet_count, 20);

        let at_max = OrderForm::default()
            .apply(FormEdit::SetSheetCount(60))
            .apply(FormEdit::IncrementSheets);
        assert_eq!(at_max.sheet_count, 60);

        let stepped = OrderForm::default().apply(FormEdit::IncrementSheets);
        assert_eq!(stepped.sheet_count, 21);
    }

    #[test]
    fn test_buttons_pull_out_of_range_values_back() {
        let high = OrderForm::default()
            .apply(FormEdit::SetSheetCount(80))
            .apply(FormEdit::DecrementSheets);
        assert_eq!(high.sheet_count, 79);

        let high = OrderForm::default()
            .apply(FormEdit::SetSheetCount(80))
            .apply(FormEdit::IncrementSheets);
        assert_eq!(high.sheet_count, 60);

        let low = OrderForm::default()
            .apply(FormEdit::SetSheetCount(3))
            .apply(FormEdit::DecrementSheets);
        assert_eq!(low.sheet_count, 20);
    }

    #[test]
    fn test_raw_sheet_count_is_stored_unclamped() {
        let form = OrderForm::default().apply(FormEdit::SetSheetCount(75));
        assert_eq!(form.sheet_count, 75);
    }

    #[test]
    fn test_address_edits_touch_one_field() {
        let form = OrderForm::default()
            .apply(FormEdit::SetAddress(AddressField::City, "Jaipur".to_string()));

        assert_eq!(form.delivery_address.city, "Jaipur");
        assert_eq!(form.delivery_address.country, "India");
        assert!(form.delivery_address.name.is_empty());
    }

    #[test]
    fn test_front_page_text_limits() {
        let form = OrderForm::default()
            .apply(FormEdit::SetFrontPage(
                FrontPageField::Initials,
                "ABCDEFGHIJKLMNOP".to_string(),
            ))
            .apply(FormEdit::SetFrontPage(FrontPageField::CustomText, "x".repeat(150)))
            .apply(FormEdit::SetFrontPage(FrontPageField::FullNames, "y".repeat(150)));

        let front_page = &form.front_page_customization;
        assert_eq!(front_page.initials, "ABCDEFGHIJ");
        assert_eq!(front_page.custom_text.chars().count(), 100);
        assert_eq!(front_page.full_names.chars().count(), 150);
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        let form = OrderForm::default().apply(FormEdit::SetFrontPage(
            FrontPageField::Initials,
            "अआइईउऊऋएऐओऔ".to_string(),
        ));

        assert_eq!(form.front_page_customization.initials.chars().count(), 10);
    }
}
