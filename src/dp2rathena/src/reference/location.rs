//! Equip location definitions

use std::fmt;

/// rAthena equipment placement (`Locations` keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    HeadTop,
    HeadMid,
    HeadLow,
    Armor,
    RightHand,
    LeftHand,
    Garment,
    Shoes,
    RightAccessory,
    LeftAccessory,
    CostumeHeadTop,
    CostumeHeadMid,
    CostumeHeadLow,
    CostumeGarment,
    Ammo,
    ShadowArmor,
    ShadowWeapon,
    ShadowShield,
    ShadowShoes,
    ShadowRightAccessory,
    ShadowLeftAccessory,
    /// Right_Hand + Left_Hand
    BothHand,
    /// Right_Accessory + Left_Accessory
    BothAccessory,
}

impl Location {
    pub fn name(self) -> &'static str {
        match self {
            Self::HeadTop => "Head_Top",
            Self::HeadMid => "Head_Mid",
            Self::HeadLow => "Head_Low",
            Self::Armor => "Armor",
            Self::RightHand => "Right_Hand",
            Self::LeftHand => "Left_Hand",
            Self::Garment => "Garment",
            Self::Shoes => "Shoes",
            Self::RightAccessory => "Right_Accessory",
            Self::LeftAccessory => "Left_Accessory",
            Self::CostumeHeadTop => "Costume_Head_Top",
            Self::CostumeHeadMid => "Costume_Head_Mid",
            Self::CostumeHeadLow => "Costume_Head_Low",
            Self::CostumeGarment => "Costume_Garment",
            Self::Ammo => "Ammo",
            Self::ShadowArmor => "Shadow_Armor",
            Self::ShadowWeapon => "Shadow_Weapon",
            Self::ShadowShield => "Shadow_Shield",
            Self::ShadowShoes => "Shadow_Shoes",
            Self::ShadowRightAccessory => "Shadow_Right_Accessory",
            Self::ShadowLeftAccessory => "Shadow_Left_Accessory",
            Self::BothHand => "Both_Hand",
            Self::BothAccessory => "Both_Accessory",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
