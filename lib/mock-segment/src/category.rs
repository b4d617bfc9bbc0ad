use crate::Error;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::{fmt, str::FromStr};

/// Analysis types offered by the demo. The discriminant indexes the mask
/// generator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Category {
    Salient = 0,
    Camouflaged,
    Polyp,
    BreastLesion,
}

impl Category {
    /// Every category in discriminant order.
    pub const ALL: [Category; 4] = [
        Category::Salient,
        Category::Camouflaged,
        Category::Polyp,
        Category::BreastLesion,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn all() -> &'static [Category] {
        &Self::ALL
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::Salient => "SALIENT",
            Category::Camouflaged => "CAMOUFLAGED",
            Category::Polyp => "POLYP",
            Category::BreastLesion => "BREAST_LESION",
        }
    }

    /// Label shown in the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Salient => "显著性物体检测",
            Category::Camouflaged => "伪装物体检测",
            Category::Polyp => "息肉分割",
            Category::BreastLesion => "乳腺癌分割",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Category::Salient => "Salient object detection",
            Category::Camouflaged => "Camouflaged object detection",
            Category::Polyp => "Polyp segmentation",
            Category::BreastLesion => "Breast lesion segmentation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Salient => "Identify the most prominent object regions in the image",
            Category::Camouflaged => "Detect hidden objects that blend into the background",
            Category::Polyp => "Segment polyps in endoscopic images",
            Category::BreastLesion => "Highlight abnormal regions in mammography images",
        }
    }

    /// Lowercase name used in output file names.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Salient => "salient",
            Category::Camouflaged => "camouflaged",
            Category::Polyp => "polyp",
            Category::BreastLesion => "breast_lesion",
        }
    }

    pub fn try_from_index(index: u8) -> crate::Result<Self> {
        Self::try_from(index)
            .map_err(|e| Error::UnsupportedCategory(format!("discriminant {}", e.number)))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    // Accepts `BREAST_LESION`, `breast-lesion`, `Breast_Lesion` and the
    // selector labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.to_ascii_uppercase().replace('-', "_");

        Category::all()
            .iter()
            .copied()
            .find(|c| c.name() == normalized || c.label() == trimmed)
            .ok_or_else(|| Error::UnsupportedCategory(s.to_string()))
    }
}
