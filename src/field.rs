use serde::{Deserialize, Serialize};

macro_rules! fields_enum {
	($(#[$enum_meta:meta])* $vis:vis enum $enum_id:ident { $($(#[$meta:meta])* $id:ident : $name:literal),* }) => {
		$(#[$enum_meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(rename_all = "camelCase")]
		$vis enum $enum_id {
			$($(#[$meta])* $id),*
		}

		impl $enum_id {
			pub const COUNT: usize = fields_enum!(@count $($id,)*);
			pub const LIST: [Self; Self::COUNT] = [$(Self::$id),*];

			pub fn from_name(name: &str) -> Option<Self> {
				match name {
					$($name => Some(Self::$id),)*
					_ => None
				}
			}

			/// Human readable field name, as used in findings.
			pub fn name(&self) -> &'static str {
				match self {
					$(Self::$id => $name),*
				}
			}
		}

		impl std::fmt::Display for $enum_id {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.name())
			}
		}
	};
	(@count $a:ident, $($rest:ident,)*) => {
		1usize + fields_enum!(@count $($rest,)*)
	};
	(@count) => {
		0usize
	}
}

fields_enum! {
    /// Data field of a machine readable zone.
    pub enum Field {
        /// Document code, one or two characters.
        DocumentCode: "document code",

        /// Issuing state or organization.
        IssuingCountry: "issuing country",

        /// Primary identifier.
        Surname: "surname",

        /// Secondary identifier.
        GivenNames: "given names",

        DocumentNumber: "document number",

        Nationality: "nationality",

        DateOfBirth: "date of birth",

        Sex: "sex",

        DateOfExpiry: "date of expiry",

        /// Optional data, for use of the issuing state.
        OptionalData: "optional data",

        /// Second optional data element (TD1 line 2).
        OptionalData2: "optional data 2",

        /// Position with no confirmed meaning, carried verbatim.
        Reserved: "reserved",

        /// Composite check digit over several fields.
        Composite: "composite"
    }
}

#[cfg(test)]
mod tests {
    use super::Field;

    #[test]
    fn names_round_trip() {
        assert_eq!(Field::COUNT, 13);
        for field in Field::LIST {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::DateOfBirth.to_string(), "date of birth");
    }
}
