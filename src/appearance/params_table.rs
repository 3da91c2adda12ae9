//! Generated visual parameter catalog
//!
//! Generated from the avatar shape definition data; do not edit by
//! hand. Entries are ascending by id so lookups can binary search.

use super::visual_params::{VisualAlphaParam, VisualColorParam, VisualParam};

const BLONDE_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [255, 235, 179, 255]];
const BLUSH_RAMP: &[[u8; 4]] = &[[253, 162, 193, 200], [255, 56, 79, 200]];
const EYE_RAMP: &[[u8; 4]] = &[[50, 25, 5, 255], [109, 55, 15, 255], [150, 93, 49, 255], [152, 118, 25, 255], [95, 179, 107, 255], [87, 192, 191, 255], [95, 172, 222, 255], [128, 128, 128, 255]];
const EYE_LIGHT_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [255, 255, 255, 255]];
const LIPSTICK_RAMP: &[[u8; 4]] = &[[245, 161, 177, 200], [216, 37, 67, 200], [178, 48, 76, 200], [68, 0, 11, 200]];
const LIP_PINK_RAMP: &[[u8; 4]] = &[[220, 115, 115, 0], [220, 115, 115, 128]];
const NAIL_RAMP: &[[u8; 4]] = &[[255, 187, 200, 255], [194, 102, 127, 255], [227, 34, 99, 255]];
const PIGMENT_RAMP: &[[u8; 4]] = &[[252, 215, 200, 255], [240, 177, 112, 255], [90, 40, 16, 255], [29, 9, 6, 255]];
const RAINBOW_RAMP: &[[u8; 4]] = &[[255, 0, 0, 255], [255, 255, 0, 255], [0, 255, 0, 255], [0, 255, 255, 255], [0, 0, 255, 255], [255, 0, 255, 255]];
const RED_HAIR_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [118, 47, 19, 255]];
const ROSY_RAMP: &[[u8; 4]] = &[[198, 71, 71, 0], [198, 71, 71, 255]];
const RUDDY_RAMP: &[[u8; 4]] = &[[0, 0, 0, 0], [118, 47, 19, 255]];
const SHADOW_RAMP: &[[u8; 4]] = &[[252, 247, 246, 200], [255, 206, 206, 200]];
const SKIRT_BLUE_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [0, 0, 255, 255]];
const SKIRT_GREEN_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [0, 255, 0, 255]];
const SKIRT_RED_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [255, 0, 0, 255]];
const WHITE_HAIR_RAMP: &[[u8; 4]] = &[[0, 0, 0, 255], [255, 255, 255, 255]];

pub static PARAMS: &[VisualParam] = &[
    VisualParam { id: 1, name: "Big_Brow", group: 0, min: -0.3, max: 2.0, default: -0.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 2, name: "Nose_Big_Out", group: 0, min: -0.8, max: 2.5, default: -0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 4, name: "Broad_Nostrils", group: 0, min: -0.5, max: 1.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 5, name: "Cleft_Chin", group: 0, min: -0.1, max: 1.0, default: -0.1, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 6, name: "Bulbous_Nose_Tip", group: 0, min: -0.3, max: 1.0, default: -0.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 7, name: "Weak_Chin", group: 0, min: -0.5, max: 0.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 8, name: "Double_Chin", group: 0, min: -0.5, max: 1.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 10, name: "Sunken_Cheeks", group: 0, min: -1.5, max: 3.0, default: -1.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 11, name: "Noble_Nose_Bridge", group: 0, min: -0.5, max: 1.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 12, name: "Jowls", group: 0, min: -0.5, max: 2.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 13, name: "Cleft_Chin_Upper", group: 0, min: 0.0, max: 1.5, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 14, name: "High_Cheek_Bones", group: 0, min: -0.5, max: 1.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 15, name: "Ears_Out", group: 0, min: -0.5, max: 1.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 16, name: "Pointy_Eyebrows", group: 0, min: -0.5, max: 3.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 17, name: "Square_Jaw", group: 0, min: -0.5, max: 1.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 18, name: "Puffy_Upper_Cheeks", group: 0, min: -1.5, max: 2.5, default: -1.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 19, name: "Upturned_Nose_Tip", group: 0, min: -1.5, max: 1.0, default: -1.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 20, name: "Bulbous_Nose", group: 0, min: -0.5, max: 1.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 21, name: "Upper_Eyelid_Fold", group: 0, min: -0.2, max: 1.3, default: -0.2, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 22, name: "Attached_Earlobes", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 23, name: "Baggy_Eyes", group: 0, min: -0.5, max: 1.5, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 24, name: "Wide_Eyes", group: 0, min: -1.5, max: 2.0, default: -1.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 25, name: "Wide_Lip_Cleft", group: 0, min: -0.8, max: 1.5, default: -0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 27, name: "Wide_Nose_Bridge", group: 0, min: -1.3, max: 1.2, default: -1.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 33, name: "Height", group: 0, min: -2.3, max: 2.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 34, name: "Thickness", group: 0, min: -0.7, max: 1.5, default: -0.15, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 35, name: "Big_Ears", group: 0, min: -1.0, max: 2.0, default: -1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 36, name: "Shoulders", group: 0, min: -0.5, max: 1.4, default: -0.36, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 37, name: "Hip_Width", group: 0, min: -3.2, max: 2.8, default: -0.4, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 38, name: "Torso_Length", group: 0, min: -1.0, max: 1.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 80, name: "Male", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 93, name: "Glove_Length", group: 0, min: 0.01, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[1058], bump: false },
    VisualParam { id: 98, name: "Eye_Color", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: EYE_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 99, name: "Eye_Lightness", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: EYE_LIGHT_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 105, name: "Breast_Size", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 108, name: "Rainbow_Color", group: 1, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: RAINBOW_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 110, name: "Red_Skin", group: 1, min: 0.0, max: 0.1, default: 0.0, color: Some(VisualColorParam { colors: RUDDY_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 111, name: "Pigment", group: 0, min: 0.0, max: 1.0, default: 0.5, color: Some(VisualColorParam { colors: PIGMENT_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 112, name: "Rainbow_Color", group: 1, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: RAINBOW_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 113, name: "Red_Hair", group: 1, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: RED_HAIR_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 114, name: "Blonde_Hair", group: 0, min: 0.0, max: 1.0, default: 0.5, color: Some(VisualColorParam { colors: BLONDE_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 115, name: "White_Hair", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: WHITE_HAIR_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 116, name: "Rosy_Complexion", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: ROSY_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 117, name: "Lip_Pinkness", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: LIP_PINK_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 119, name: "Eyebrow_Size", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 130, name: "Front_Fringe", group: 0, min: 0.0, max: 1.0, default: 0.45, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 131, name: "Back_Fringe", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 132, name: "Side_Fringe", group: 0, min: 0.0, max: 1.0, default: 0.39, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 133, name: "Hair_Front", group: 0, min: 0.0, max: 1.0, default: 0.25, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 134, name: "Hair_Sides", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 135, name: "Hair_Back", group: 0, min: 0.0, max: 1.0, default: 0.55, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 136, name: "Hair_Sweep", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 137, name: "Hair_Tilt", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 140, name: "Part_Middle", group: 0, min: 0.0, max: 2.0, default: 0.05, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 141, name: "Part_Right", group: 0, min: 0.0, max: 2.0, default: 0.2, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 142, name: "Part_Left", group: 0, min: 0.0, max: 2.0, default: 0.25, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 143, name: "Full_Hair_Sides", group: 0, min: -4.0, max: 1.5, default: 0.125, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 150, name: "Body_Definition", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 155, name: "Lip_Width", group: 0, min: -0.9, max: 1.3, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 157, name: "Belly_Size", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 162, name: "Facial_Definition", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 163, name: "Wrinkles", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 165, name: "Freckles", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 166, name: "Sideburns", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 167, name: "Moustache", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 168, name: "Soulpatch", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 169, name: "Chin_Curtains", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 177, name: "Hair_Shear_Front", group: 0, min: 0.0, max: 3.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 181, name: "Hair_Big_Front", group: 0, min: -1.0, max: 1.0, default: 0.14, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 182, name: "Hair_Big_Top", group: 0, min: -1.0, max: 1.0, default: 0.7, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 183, name: "Hair_Big_Back", group: 0, min: -1.0, max: 1.0, default: 0.05, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 184, name: "Hair_Spiked", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 185, name: "Deep_Chin", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 192, name: "Bangs_Part_Middle", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 193, name: "Head_Shape", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 196, name: "Eye_Spacing", group: 0, min: -2.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 198, name: "Heel_Height", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 400, name: "Nose_Thickness", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 401, name: "Nostril_Division", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 402, name: "Chin_Angle", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 403, name: "Jaw_Jut", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 404, name: "Eye_Slant", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 405, name: "Brow_Depth", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 406, name: "Cheek_Hollow", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 407, name: "Temple_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 408, name: "Forehead_Round", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 409, name: "Skull_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 410, name: "Skull_Length", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 411, name: "Ear_Angle", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 412, name: "Ear_Tips", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 413, name: "Earlobe_Size", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 414, name: "Nose_Tip_Angle", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 415, name: "Nose_Flatness", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 416, name: "Lip_Fullness", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 417, name: "Lip_Protrude", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 418, name: "Mouth_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 419, name: "Mouth_Height", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 420, name: "Chin_Depth", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 421, name: "Chin_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 422, name: "Neck_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 423, name: "Collarbone_Depth", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 424, name: "Ribcage_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 425, name: "Waist_Depth", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 426, name: "Stomach_Round", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 427, name: "Back_Arch", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 428, name: "Shoulder_Slope", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 429, name: "Arm_Thickness", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 430, name: "Wrist_Size", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 431, name: "Finger_Length", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 432, name: "Thigh_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 433, name: "Knee_Angle", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 434, name: "Calf_Size", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 435, name: "Ankle_Width", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 436, name: "Foot_Arch", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 437, name: "Heel_Depth", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 438, name: "Toe_Length", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 503, name: "Platform_Height", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 505, name: "Lip_Thickness", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 506, name: "Mouth_Corner", group: 0, min: -2.0, max: 2.0, default: -1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 507, name: "Eye_Depth", group: 0, min: -2.0, max: 2.5, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 508, name: "Shoe_Platform_Width", group: 0, min: -1.0, max: 2.0, default: -1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 513, name: "Heel_Shape", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 514, name: "Toe_Shape", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 515, name: "Foot_Size", group: 0, min: -1.0, max: 3.0, default: -1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 517, name: "Wide_Nose", group: 0, min: -0.5, max: 1.0, default: -0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 518, name: "Eyelashes_Long", group: 0, min: -0.3, max: 1.5, default: -0.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 603, name: "Sleeve_Length", group: 0, min: 0.01, max: 1.0, default: 0.7, color: None, alpha: None, drivers: &[1010], bump: false },
    VisualParam { id: 604, name: "Bottom_Length", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[1011], bump: false },
    VisualParam { id: 605, name: "Collar_Front", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[1012], bump: false },
    VisualParam { id: 606, name: "Jacket_Length", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[1019], bump: false },
    VisualParam { id: 607, name: "Collar_Back", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 608, name: "Jacket_Bottom_Length", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 609, name: "Jacket_Collar_Front", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 614, name: "Waist_Height", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 615, name: "Pants_Length", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[1018], bump: false },
    VisualParam { id: 616, name: "Shoe_Height", group: 0, min: 0.0, max: 1.0, default: 0.1, color: None, alpha: None, drivers: &[1021], bump: false },
    VisualParam { id: 617, name: "Socks_Length", group: 0, min: 0.0, max: 1.0, default: 0.35, color: None, alpha: None, drivers: &[1025], bump: false },
    VisualParam { id: 619, name: "Pants_Waist", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 625, name: "Leg_Pantflair", group: 0, min: 0.0, max: 1.5, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 629, name: "Forehead_Angle", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 633, name: "Fat_Head", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 634, name: "Fat_Torso", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 635, name: "Fat_Legs", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 637, name: "Body_Fat", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 646, name: "Egg_Head", group: 0, min: -1.3, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 647, name: "Squash_Stretch_Head", group: 0, min: -0.5, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 649, name: "Torso_Muscles", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 650, name: "Eyelid_Corner_Up", group: 0, min: -1.3, max: 1.2, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 652, name: "Leg_Muscles", group: 0, min: 0.0, max: 1.5, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 653, name: "Tall_Lips", group: 0, min: -1.0, max: 2.0, default: -1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 654, name: "Toe_Thickness", group: 0, min: 0.0, max: 2.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 656, name: "Crooked_Nose", group: 0, min: -2.0, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 659, name: "Lip_Corner_Up", group: 0, min: -1.3, max: 1.2, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 660, name: "Shift_Mouth", group: 0, min: -2.0, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 662, name: "Face_Shear", group: 0, min: -2.0, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 664, name: "Pop_Eye", group: 0, min: -1.3, max: 1.2, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 674, name: "Hair_Shear_Back", group: 0, min: -1.0, max: 2.0, default: -0.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 675, name: "Hand_Size", group: 0, min: -0.3, max: 0.3, default: -0.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 676, name: "Love_Handles", group: 0, min: -1.0, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 682, name: "Head_Size", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 683, name: "Neck_Thickness", group: 0, min: -0.4, max: 1.3, default: -0.15, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 684, name: "Breast_Cleavage", group: 0, min: -0.3, max: 1.3, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 685, name: "Pectorals", group: 0, min: -0.5, max: 1.1, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 690, name: "Eye_Size", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 692, name: "Leg_Length", group: 0, min: -1.0, max: 1.0, default: -0.2, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 693, name: "Arm_Length", group: 0, min: -1.0, max: 1.0, default: 0.6, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 700, name: "Lipstick_Color", group: 0, min: 0.0, max: 1.0, default: 0.25, color: Some(VisualColorParam { colors: LIPSTICK_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 701, name: "Lipstick", group: 0, min: 0.0, max: 0.9, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 702, name: "Lipgloss", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 703, name: "Eyeliner", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 704, name: "Blush", group: 0, min: 0.0, max: 0.9, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 705, name: "Blush_Color", group: 0, min: 0.0, max: 1.0, default: 0.5, color: Some(VisualColorParam { colors: BLUSH_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 706, name: "Out_Shdw_Opacity", group: 0, min: 0.2, max: 1.0, default: 0.6, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 707, name: "Outer_Shadow", group: 0, min: 0.0, max: 0.7, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 708, name: "Out_Shdw_Color", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: SHADOW_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 709, name: "Inner_Shadow", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 710, name: "Nailpolish", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 711, name: "Nailpolish_Color", group: 0, min: 0.0, max: 1.0, default: 0.3, color: Some(VisualColorParam { colors: NAIL_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 712, name: "In_Shdw_Color", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: SHADOW_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 713, name: "In_Shdw_Opacity", group: 0, min: 0.2, max: 1.0, default: 0.7, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 714, name: "Eyeliner_Color", group: 0, min: 0.0, max: 1.0, default: 0.0, color: Some(VisualColorParam { colors: SHADOW_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 750, name: "Eyebrow_Density", group: 0, min: 0.0, max: 1.0, default: 0.7, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 752, name: "Hair_Thickness", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 753, name: "Saddlebags", group: 0, min: -0.5, max: 3.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 754, name: "Taper_Back", group: 0, min: -1.0, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 755, name: "Taper_Front", group: 0, min: -1.0, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 756, name: "Neck_Length", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 757, name: "Lower_Eyebrows", group: 0, min: -4.0, max: 2.0, default: -1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 758, name: "Arced_Eyebrows", group: 0, min: 0.0, max: 2.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 760, name: "Jaw_Angle", group: 0, min: -1.2, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 763, name: "Hair_Volume", group: 0, min: 0.0, max: 1.0, default: 0.55, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 764, name: "Lip_Cleft_Deep", group: 0, min: -0.3, max: 1.2, default: -0.1, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 765, name: "Puffy_Lower_Lids", group: 0, min: -0.3, max: 2.5, default: -0.3, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 775, name: "Body_Freckles", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 795, name: "Butt_Size", group: 0, min: 0.0, max: 1.0, default: 0.25, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 796, name: "Pointy_Ears", group: 0, min: -0.4, max: 3.0, default: -0.4, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 797, name: "Fat_Upper_Lip", group: 0, min: 0.0, max: 1.5, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 798, name: "Fat_Lower_Lip", group: 0, min: 0.0, max: 1.5, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 799, name: "Lip_Ratio", group: 0, min: 0.0, max: 1.0, default: 0.5, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 800, name: "Sleeve_Flair", group: 0, min: 0.0, max: 1.5, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 814, name: "Pants_Waist_Height", group: 0, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 816, name: "Loose_Lower_Clothing", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[1041], bump: false },
    VisualParam { id: 828, name: "Loose_Upper_Clothing", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[1042], bump: false },
    VisualParam { id: 841, name: "Bowed_Legs", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 842, name: "Hip_Length", group: 0, min: -1.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 843, name: "No_Chest", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 844, name: "Glove_Fingers", group: 0, min: 0.01, max: 1.0, default: 1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 845, name: "Skirt_Bustle", group: 0, min: 0.0, max: 2.0, default: 0.2, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 858, name: "Skirt_Length", group: 0, min: 0.01, max: 1.0, default: 0.4, color: None, alpha: None, drivers: &[1057], bump: false },
    VisualParam { id: 859, name: "Slit_Front", group: 0, min: 0.0, max: 1.0, default: 1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 860, name: "Slit_Back", group: 0, min: 0.0, max: 1.0, default: 1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 861, name: "Slit_Left", group: 0, min: 0.0, max: 1.0, default: 1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 862, name: "Slit_Right", group: 0, min: 0.0, max: 1.0, default: 1.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 863, name: "Skirt_Looseness", group: 0, min: 0.0, max: 1.0, default: 0.333, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 868, name: "Shirt_Wrinkles", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[1051], bump: false },
    VisualParam { id: 869, name: "Pants_Wrinkles", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[1052], bump: false },
    VisualParam { id: 877, name: "Jacket_Wrinkles", group: 0, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: None, drivers: &[1053], bump: false },
    VisualParam { id: 879, name: "Male_Package", group: 0, min: -0.5, max: 2.0, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 880, name: "Eyelid_Inner_Corner_Up", group: 0, min: -1.3, max: 1.2, default: 0.0, color: None, alpha: None, drivers: &[], bump: false },
    VisualParam { id: 921, name: "Skirt_Red", group: 0, min: 0.0, max: 1.0, default: 1.0, color: Some(VisualColorParam { colors: SKIRT_RED_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 922, name: "Skirt_Green", group: 0, min: 0.0, max: 1.0, default: 1.0, color: Some(VisualColorParam { colors: SKIRT_GREEN_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 923, name: "Skirt_Blue", group: 0, min: 0.0, max: 1.0, default: 1.0, color: Some(VisualColorParam { colors: SKIRT_BLUE_RAMP }), alpha: None, drivers: &[], bump: false },
    VisualParam { id: 1010, name: "Sleeve_Length_Cloth", group: 1, min: 0.01, max: 1.0, default: 0.7, color: None, alpha: Some(VisualAlphaParam { tga_file: "shirt_sleeve_alpha.tga", skip_if_zero: true, multiply_blend: false, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1011, name: "Shirt_Bottom_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: Some(VisualAlphaParam { tga_file: "shirt_bottom_alpha.tga", skip_if_zero: true, multiply_blend: true, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1012, name: "Collar_Front_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: Some(VisualAlphaParam { tga_file: "shirt_collar_alpha.tga", skip_if_zero: true, multiply_blend: true, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1018, name: "Pants_Length_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: Some(VisualAlphaParam { tga_file: "pants_length_alpha.tga", skip_if_zero: true, multiply_blend: false, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1019, name: "Jacket_Length_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.8, color: None, alpha: Some(VisualAlphaParam { tga_file: "jacket_length_upper_alpha.tga", skip_if_zero: true, multiply_blend: false, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1021, name: "Shoe_Height_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.1, color: None, alpha: Some(VisualAlphaParam { tga_file: "shoe_height_alpha.tga", skip_if_zero: true, multiply_blend: false, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1025, name: "Socks_Length_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.35, color: None, alpha: Some(VisualAlphaParam { tga_file: "socks_length_alpha.tga", skip_if_zero: true, multiply_blend: false, domain: 0.05 }), drivers: &[], bump: false },
    VisualParam { id: 1041, name: "Loose_Lower_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: Some(VisualAlphaParam { tga_file: "", skip_if_zero: true, multiply_blend: false, domain: 0.0 }), drivers: &[], bump: false },
    VisualParam { id: 1042, name: "Loose_Upper_Cloth", group: 1, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: Some(VisualAlphaParam { tga_file: "", skip_if_zero: true, multiply_blend: false, domain: 0.0 }), drivers: &[], bump: false },
    VisualParam { id: 1051, name: "Shirt_Wrinkles_Bump", group: 1, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: Some(VisualAlphaParam { tga_file: "bump_shirt_wrinkles.tga", skip_if_zero: true, multiply_blend: false, domain: 0.0 }), drivers: &[], bump: true },
    VisualParam { id: 1052, name: "Pants_Wrinkles_Bump", group: 1, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: Some(VisualAlphaParam { tga_file: "bump_pants_wrinkles.tga", skip_if_zero: true, multiply_blend: false, domain: 0.0 }), drivers: &[], bump: true },
    VisualParam { id: 1053, name: "Jacket_Wrinkles_Bump", group: 1, min: 0.0, max: 1.0, default: 0.0, color: None, alpha: Some(VisualAlphaParam { tga_file: "bump_jacket_wrinkles.tga", skip_if_zero: true, multiply_blend: false, domain: 0.0 }), drivers: &[], bump: true },
    VisualParam { id: 1057, name: "Skirt_Length_Cloth", group: 1, min: 0.01, max: 1.0, default: 0.4, color: None, alpha: Some(VisualAlphaParam { tga_file: "skirt_length_alpha.tga", skip_if_zero: true, multiply_blend: true, domain: 0.0 }), drivers: &[], bump: false },
    VisualParam { id: 1058, name: "Glove_Length_Cloth", group: 1, min: 0.01, max: 1.0, default: 0.8, color: None, alpha: Some(VisualAlphaParam { tga_file: "glove_length_alpha.tga", skip_if_zero: true, multiply_blend: false, domain: 0.05 }), drivers: &[], bump: false },
];
