//! Read-only contract interfaces used by the lookup

use alloy::sol;

sol! {
    /// Minimal ERC-20 read interface
    interface IERC20 {
        function balanceOf(address account) external view returns (uint256);
        function decimals() external view returns (uint8);
        function symbol() external view returns (string memory);
    }

    /// ENS registry (EIP-137)
    interface IEnsRegistry {
        function resolver(bytes32 node) external view returns (address);
    }

    /// Public resolver subset: forward address and reverse name records
    interface IEnsResolver {
        function addr(bytes32 node) external view returns (address);
        function name(bytes32 node) external view returns (string memory);
    }
}
