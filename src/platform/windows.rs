// BrowseLighter feature control for Windows
// HKCU\Software\Microsoft\Internet Explorer\Main\FeatureControl\FEATURE_BROWSER_EMULATION
//   <exe file name> = REG_DWORD <mode>

use windows::core::PCWSTR;
use windows::Win32::System::Registry::{
    RegCloseKey, RegCreateKeyExW, RegSetValueExW, HKEY, HKEY_CURRENT_USER, KEY_WRITE,
    REG_DWORD, REG_OPTION_NON_VOLATILE,
};

use super::FEATURE_BROWSER_EMULATION_KEY;
use crate::types::errors::FeatureControlError;

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Writes `mode` under the emulation key for `exe_name`, creating the key if needed.
pub fn set_browser_emulation(exe_name: &str, mode: u32) -> Result<(), FeatureControlError> {
    let key_path = wide(FEATURE_BROWSER_EMULATION_KEY);
    let value_name = wide(exe_name);
    let data = mode.to_le_bytes();

    unsafe {
        let mut hkey = HKEY::default();
        let created = RegCreateKeyExW(
            HKEY_CURRENT_USER,
            PCWSTR(key_path.as_ptr()),
            None,
            PCWSTR::null(),
            REG_OPTION_NON_VOLATILE,
            KEY_WRITE,
            None,
            &mut hkey,
            None,
        );
        if created.is_err() {
            return Err(FeatureControlError::OpenKey(format!("{:?}", created)));
        }

        let set = RegSetValueExW(
            hkey,
            PCWSTR(value_name.as_ptr()),
            Some(0),
            REG_DWORD,
            Some(&data[..]),
        );
        let _ = RegCloseKey(hkey);

        if set.is_err() {
            return Err(FeatureControlError::SetValue(format!("{:?}", set)));
        }
    }

    Ok(())
}
